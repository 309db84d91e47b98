//! DTOs and payload types for backend requests/responses.

use crate::model::Mood;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct LogInRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SignUpRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,

    #[serde(rename = "roleRequestDTO")]
    pub(super) role_request: RoleRequest<'a>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct RoleRequest<'a> {
    #[serde(rename = "roleListName")]
    pub(super) role_list_name: &'a [String],
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreatePetRequest<'a> {
    pub(super) name: &'a str,
    pub(super) pet_type: &'a str,
}

/// Partial pet update: only the changed fields travel.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunger_level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}
