//! Pet CRUD against the backend. Every successful response is authoritative
//! and replaces the client's cached record wholesale.

use reqwest::Method;

use crate::model::{Pet, PetType};

use super::*;

impl ApiClient {
    pub fn my_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let path = "/api/pets/my-pets";
        let resp = self.request(Method::GET, path).send()?;
        let pets: Vec<Pet> = self.ensure_ok(resp, path)?.json()?;
        Ok(pets)
    }

    pub fn create_pet(&self, name: &str, pet_type: &PetType) -> Result<Pet, ApiError> {
        let path = "/api/pets";
        let resp = self
            .request(Method::POST, path)
            .json(&CreatePetRequest {
                name,
                pet_type: pet_type.as_str(),
            })
            .send()?;
        let pet: Pet = self.ensure_ok(resp, path)?.json()?;
        Ok(pet)
    }

    pub fn update_pet(&self, pet_id: u64, update: &PetUpdate) -> Result<Pet, ApiError> {
        let path = format!("/api/pets/{}", pet_id);
        let resp = self.request(Method::PUT, &path).json(update).send()?;
        let pet: Pet = self.ensure_ok(resp, &path)?.json()?;
        Ok(pet)
    }

    pub fn delete_pet(&self, pet_id: u64) -> Result<(), ApiError> {
        let path = format!("/api/pets/{}", pet_id);
        let resp = self.request(Method::DELETE, &path).send()?;
        let _ = self.ensure_ok(resp, &path)?;
        Ok(())
    }

    pub fn get_pet(&self, pet_id: u64) -> Result<Pet, ApiError> {
        let path = format!("/api/pets/{}", pet_id);
        let resp = self.request(Method::GET, &path).send()?;
        let pet: Pet = self.ensure_ok(resp, &path)?.json()?;
        Ok(pet)
    }

    /// Admin surface: every pet in the system.
    pub fn all_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let path = "/api/pets/all";
        let resp = self.request(Method::GET, path).send()?;
        let pets: Vec<Pet> = self.ensure_ok(resp, path)?.json()?;
        Ok(pets)
    }
}
