use anyhow::{Context, Result};

use petshell::model::{Pet, PetType};
use petshell::store::ClientStore;
use petshell::{care, forms};

use crate::cli_runtime::authed_client;

fn print_pet_line(pet: &Pet) {
    println!(
        "{:>4}  {:<20} {:<10} {:<10} E:{:>3}% H:{:>3}%",
        pet.id, pet.name, pet.pet_type, pet.mood, pet.energy_level, pet.hunger_level
    );
}

fn print_pet_detail(pet: &Pet) {
    println!("id: {}", pet.id);
    println!("name: {}", pet.name);
    println!("type: {}", pet.pet_type);
    println!("mood: {}", pet.mood);
    println!("energy: {}%", pet.energy_level);
    println!("hunger: {}%", pet.hunger_level);
    println!(
        "sprite: {}",
        care::sprite_name(&pet.pet_type, pet.energy_level)
    );
}

pub(super) fn handle_pets_command(all: bool, json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;

    let pets = if all {
        client.all_pets().context("list all pets")?
    } else {
        client.my_pets().context("list pets")?
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pets).context("serialize pets json")?
        );
    } else if pets.is_empty() {
        println!("No pets yet (create one with `petshell pet create`)");
    } else {
        for pet in &pets {
            print_pet_line(pet);
        }
    }
    Ok(())
}

pub(super) fn handle_create_command(name: &str, pet_type: &str, json: bool) -> Result<()> {
    forms::validate_new_pet(name, pet_type)?;

    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;

    let pet_type = PetType::from(pet_type.to_string());
    let pet = client.create_pet(name, &pet_type).context("create pet")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pet).context("serialize pet json")?
        );
    } else {
        println!("Created pet {} ({})", pet.name, pet.id);
    }
    Ok(())
}

pub(super) fn handle_show_command(pet_id: u64, json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;
    let pet = client.get_pet(pet_id).context("fetch pet")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pet).context("serialize pet json")?
        );
    } else {
        print_pet_detail(&pet);
    }
    Ok(())
}

pub(super) fn handle_feed_command(pet_id: u64, json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;

    let pet = client.get_pet(pet_id).context("fetch pet")?;
    let plan = care::plan_feed(&pet);
    let confirmed = client.update_pet(pet_id, &plan).context("feed pet")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&confirmed).context("serialize pet json")?
        );
    } else {
        println!(
            "Fed {}: energy {}% -> {}%, hunger {}% -> {}%, mood {}",
            confirmed.name,
            pet.energy_level,
            confirmed.energy_level,
            pet.hunger_level,
            confirmed.hunger_level,
            confirmed.mood
        );
    }
    Ok(())
}

pub(super) fn handle_train_command(pet_id: u64, json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;

    let pet = client.get_pet(pet_id).context("fetch pet")?;
    let plan = care::plan_train(&pet);
    let confirmed = client.update_pet(pet_id, &plan).context("train pet")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&confirmed).context("serialize pet json")?
        );
    } else {
        println!(
            "Trained {}: energy {}% -> {}%, hunger {}% -> {}%, mood {}",
            confirmed.name,
            pet.energy_level,
            confirmed.energy_level,
            pet.hunger_level,
            confirmed.hunger_level,
            confirmed.mood
        );
    }
    Ok(())
}

pub(super) fn handle_delete_command(pet_id: u64) -> Result<()> {
    let store = ClientStore::open_default()?;
    let client = authed_client(&store)?;
    client.delete_pet(pet_id).context("delete pet")?;
    println!("Deleted pet {}", pet_id);
    Ok(())
}
