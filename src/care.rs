//! Local care rules: the optimistic stat deltas applied before the backend
//! confirms an interaction, and the derived display attributes.

use crate::model::{Mood, Pet, PetType};
use crate::remote::PetUpdate;

pub const FEED_HUNGER_DELTA: u8 = 15;
pub const FEED_ENERGY_DELTA: u8 = 10;
pub const TRAIN_ENERGY_DELTA: u8 = 15;
pub const TRAIN_HUNGER_DELTA: u8 = 15;

/// Energy at or below this renders the low-energy sprite variant.
pub const LOW_ENERGY_SPRITE_THRESHOLD: u8 = 70;

/// Mood as a function of the stats alone, evaluated top-down. Used to guess
/// the backend's answer; the response always wins.
pub fn classify_mood(energy: u8, hunger: u8) -> Mood {
    if hunger >= 80 {
        return Mood::Angry;
    }
    if energy <= 20 {
        return Mood::Sad;
    }
    if energy >= 80 {
        return Mood::Excited;
    }
    if hunger <= 20 {
        return Mood::Happy;
    }
    Mood::Neutral
}

/// Optimistic next state for feeding: hunger drops, energy rises, both
/// clamped to [0,100].
pub fn plan_feed(pet: &Pet) -> PetUpdate {
    let hunger = pet.hunger_level.saturating_sub(FEED_HUNGER_DELTA);
    let energy = pet.energy_level.saturating_add(FEED_ENERGY_DELTA).min(100);
    PetUpdate {
        hunger_level: Some(hunger),
        energy_level: Some(energy),
        mood: Some(classify_mood(energy, hunger)),
    }
}

/// Optimistic next state for training: energy drops, hunger rises, both
/// clamped to [0,100].
pub fn plan_train(pet: &Pet) -> PetUpdate {
    let energy = pet.energy_level.saturating_sub(TRAIN_ENERGY_DELTA);
    let hunger = pet.hunger_level.saturating_add(TRAIN_HUNGER_DELTA).min(100);
    PetUpdate {
        hunger_level: Some(hunger),
        energy_level: Some(energy),
        mood: Some(classify_mood(energy, hunger)),
    }
}

/// Sprite asset for a pet. Each known type has a low-energy variant; unknown
/// types fall back to the default art.
pub fn sprite_name(pet_type: &PetType, energy: u8) -> &'static str {
    if energy <= LOW_ENERGY_SPRITE_THRESHOLD {
        return match pet_type {
            PetType::Vegeta => "vegeta_ss",
            PetType::Frezer => "frezer_ss",
            PetType::Krillin => "krillin_full_energy",
            PetType::Goku => "goku_ss",
            PetType::MrSatan => "mr_satan_ss",
            PetType::Other(_) => "default_happy_pet",
        };
    }

    match pet_type {
        PetType::Vegeta => "vegeta",
        PetType::Frezer => "frezer",
        PetType::Krillin => "krillin",
        PetType::Goku => "goku",
        PetType::MrSatan => "mr_satan",
        PetType::Other(_) => "default_pet",
    }
}

#[cfg(test)]
#[path = "tests/care_tests.rs"]
mod tests;
