use super::*;

use crate::model::{Mood, PetType};

fn pet(id: u64, name: &str) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        pet_type: PetType::Vegeta,
        mood: Mood::Neutral,
        energy_level: 50,
        hunger_level: 50,
    }
}

#[test]
fn replace_pet_overwrites_the_cached_record_wholesale() {
    let mut view = DashboardView::default();
    view.set_pets(vec![pet(1, "Rex"), pet(2, "Blue")], "t".to_string());

    let mut updated = pet(1, "Rex");
    updated.energy_level = 90;
    updated.mood = Mood::Excited;
    view.replace_pet(updated);

    assert_eq!(view.pets.len(), 2);
    assert_eq!(view.pets[0].energy_level, 90);
    assert_eq!(view.pets[0].mood, Mood::Excited);
}

#[test]
fn replace_pet_appends_a_record_the_cache_has_not_seen() {
    let mut view = DashboardView::default();
    view.set_pets(vec![pet(1, "Rex")], "t".to_string());
    view.replace_pet(pet(3, "Chirp"));
    assert_eq!(view.pets.len(), 2);
}

#[test]
fn remove_pet_keeps_the_selection_in_bounds() {
    let mut view = DashboardView::default();
    view.set_pets(vec![pet(1, "Rex"), pet(2, "Blue")], "t".to_string());
    view.selected = 1;

    view.remove_pet(2);
    assert_eq!(view.pets.len(), 1);
    assert_eq!(view.selected, 0);

    view.remove_pet(1);
    assert!(view.pets.is_empty());
    assert_eq!(view.selected, 0);
}

#[test]
fn selection_movement_is_clamped() {
    let mut view = DashboardView::default();
    view.set_pets(vec![pet(1, "Rex"), pet(2, "Blue")], "t".to_string());

    view.move_up();
    assert_eq!(view.selected, 0);

    view.move_down();
    view.move_down();
    view.move_down();
    assert_eq!(view.selected, 1);
}
