mod common;

use anyhow::{Context, Result};

use petshell::care;
use petshell::model::{Mood, PetType};
use petshell::remote::ApiError;

#[test]
fn created_pet_appears_in_the_list_with_a_server_id() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let pet = client
        .create_pet("Rex", &PetType::Goku)
        .context("create pet")?;
    assert_eq!(pet.name, "Rex");
    assert_eq!(pet.pet_type, PetType::Goku);

    let pets = client.my_pets().context("list pets")?;
    assert!(pets.iter().any(|p| p.id == pet.id && p.name == "Rex"));
    Ok(())
}

#[test]
fn feeding_applies_the_planned_stats_and_returns_the_authoritative_record() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    // New pets start at energy 50 / hunger 50.
    let pet = client.create_pet("Rex", &PetType::Goku)?;
    let plan = care::plan_feed(&pet);

    let confirmed = client.update_pet(pet.id, &plan).context("feed")?;
    assert_eq!(confirmed.energy_level, 60);
    assert_eq!(confirmed.hunger_level, 35);
    assert_eq!(confirmed.mood, Mood::Neutral);
    Ok(())
}

#[test]
fn the_server_clamps_stats_to_the_valid_range() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let pet = client.create_pet("Rex", &PetType::Vegeta)?;
    let over = petshell::remote::PetUpdate {
        hunger_level: Some(250),
        energy_level: Some(180),
        mood: None,
    };

    let confirmed = client.update_pet(pet.id, &over)?;
    assert_eq!(confirmed.hunger_level, 100);
    assert_eq!(confirmed.energy_level, 100);
    Ok(())
}

#[test]
fn deleting_a_missing_pet_surfaces_an_error_and_leaves_the_list_unchanged() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let pet = client.create_pet("Rex", &PetType::Goku)?;

    let err = client.delete_pet(pet.id + 1000).unwrap_err();
    match err {
        ApiError::Server { status, .. } => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("expected a not-found error, got {:?}", other),
    }

    let pets = client.my_pets()?;
    assert_eq!(pets.len(), 1);
    Ok(())
}

#[test]
fn deleted_pets_disappear_from_the_list() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let pet = client.create_pet("Rex", &PetType::Goku)?;
    client.delete_pet(pet.id).context("delete pet")?;

    let pets = client.my_pets()?;
    assert!(pets.is_empty());
    Ok(())
}

#[test]
fn unknown_pet_types_round_trip_verbatim() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let pet = client.create_pet("Blob", &PetType::Other("CELL".to_string()))?;
    assert_eq!(pet.pet_type, PetType::Other("CELL".to_string()));
    Ok(())
}

#[test]
fn the_admin_listing_is_denied_for_plain_users() -> Result<()> {
    let server = common::spawn_server()?;
    let token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let client = server.client_with(&token)?;

    let err = client.all_pets().unwrap_err();
    match err {
        ApiError::Denied { status, path } => {
            assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
            assert_eq!(path, "/api/pets/all");
        }
        other => panic!("expected a denied error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn admins_see_every_pet() -> Result<()> {
    let server = common::spawn_server()?;

    let user_token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    server
        .client_with(&user_token)?
        .create_pet("Rex", &PetType::Goku)?;

    let admin_token = common::sign_up(&server, "oak", "professor1", &["ADMIN"])?;
    let all = server.client_with(&admin_token)?.all_pets()?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[test]
fn other_users_pets_are_off_limits() -> Result<()> {
    let server = common::spawn_server()?;

    let ash_token = common::sign_up(&server, "ash", "pikachu1", &["USER"])?;
    let pet = server
        .client_with(&ash_token)?
        .create_pet("Rex", &PetType::Goku)?;

    let gary_token = common::sign_up(&server, "gary", "eevee123", &["USER"])?;
    let err = server.client_with(&gary_token)?.get_pet(pet.id).unwrap_err();
    match err {
        ApiError::Denied { status, .. } => {
            assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
        }
        other => panic!("expected a denied error, got {:?}", other),
    }
    Ok(())
}
