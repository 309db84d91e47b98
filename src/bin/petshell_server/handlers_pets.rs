use axum::extract::{Extension, Path};

use super::*;

const INITIAL_ENERGY: u8 = 50;
const INITIAL_HUNGER: u8 = 50;
const MAX_PET_NAME_LEN: usize = 50;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreatePetRequest {
    name: String,
    pet_type: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdatePetRequest {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    hunger_level: Option<u8>,

    #[serde(default)]
    energy_level: Option<u8>,

    #[serde(default)]
    mood: Option<String>,
}

pub(super) async fn list_my_pets(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Response {
    let pets = state.pets.read().await;
    let mut mine: Vec<Pet> = pets
        .values()
        .filter(|p| p.owner == subject.username)
        .map(|p| p.pet.clone())
        .collect();
    mine.sort_by_key(|p| p.id);
    Json(mine).into_response()
}

pub(super) async fn list_all_pets(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Response {
    if !subject.admin {
        return forbidden();
    }
    let pets = state.pets.read().await;
    let mut all: Vec<Pet> = pets.values().map(|p| p.pet.clone()).collect();
    all.sort_by_key(|p| p.id);
    Json(all).into_response()
}

pub(super) async fn create_pet(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Json(req): Json<CreatePetRequest>,
) -> Response {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return validation_failed("name is required");
    }
    if name.len() > MAX_PET_NAME_LEN {
        return validation_failed("name must not exceed 50 characters");
    }

    let id = state.next_pet_id.fetch_add(1, Ordering::SeqCst);
    let record = PetRecord {
        owner: subject.username,
        pet: Pet {
            id,
            name,
            pet_type: PetType::from(req.pet_type),
            mood: Mood::Neutral,
            energy_level: INITIAL_ENERGY,
            hunger_level: INITIAL_HUNGER,
        },
    };

    let mut pets = state.pets.write().await;
    pets.insert(id, record.clone());
    if let Err(err) = persist_pets(&state.data_dir, &pets) {
        return internal_error(err);
    }

    Json(record.pet).into_response()
}

pub(super) async fn get_pet(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(pet_id): Path<u64>,
) -> Response {
    let pets = state.pets.read().await;
    let Some(record) = pets.get(&pet_id) else {
        return not_found();
    };
    if record.owner != subject.username && !subject.admin {
        return forbidden();
    }
    Json(record.pet.clone()).into_response()
}

pub(super) async fn update_pet(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(pet_id): Path<u64>,
    Json(req): Json<UpdatePetRequest>,
) -> Response {
    let mut pets = state.pets.write().await;
    let Some(record) = pets.get_mut(&pet_id) else {
        return not_found();
    };
    if record.owner != subject.username && !subject.admin {
        return forbidden();
    }

    if let Some(name) = req.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return validation_failed("name is required");
        }
        if name.len() > MAX_PET_NAME_LEN {
            return validation_failed("name must not exceed 50 characters");
        }
        record.pet.name = name;
    }
    if let Some(hunger) = req.hunger_level {
        record.pet.hunger_level = hunger.min(100);
    }
    if let Some(energy) = req.energy_level {
        record.pet.energy_level = energy.min(100);
    }
    if let Some(mood) = req.mood {
        record.pet.mood = Mood::from(mood);
    }

    let pet = record.pet.clone();
    if let Err(err) = persist_pets(&state.data_dir, &pets) {
        return internal_error(err);
    }

    Json(pet).into_response()
}

pub(super) async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(pet_id): Path<u64>,
) -> Response {
    let mut pets = state.pets.write().await;
    let Some(record) = pets.get(&pet_id) else {
        return not_found();
    };
    if record.owner != subject.username && !subject.admin {
        return forbidden();
    }

    pets.remove(&pet_id);
    if let Err(err) = persist_pets(&state.data_dir, &pets) {
        return internal_error(err);
    }

    StatusCode::NO_CONTENT.into_response()
}
