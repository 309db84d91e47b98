//! Form constraints checked before any network call. A violation names the
//! offending field so the UI can show the message next to it.

use crate::model::KNOWN_PET_TYPES;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PET_NAME_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

fn invalid(field: &'static str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field,
        message: message.into(),
    }
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(invalid("username", "username is required"));
    }
    if password.is_empty() {
        return Err(invalid("password", "password is required"));
    }
    Ok(())
}

pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(invalid("username", "username is required"));
    }
    if username.trim().len() < MIN_USERNAME_LEN {
        return Err(invalid(
            "username",
            format!("username must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
    if password.is_empty() {
        return Err(invalid("password", "password is required"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(invalid(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if confirm_password != password {
        return Err(invalid("confirm_password", "passwords do not match"));
    }
    Ok(())
}

pub fn validate_new_pet(name: &str, pet_type: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("name", "name is required"));
    }
    if name.len() > MAX_PET_NAME_LEN {
        return Err(invalid(
            "name",
            format!("name must not exceed {} characters", MAX_PET_NAME_LEN),
        ));
    }
    if !KNOWN_PET_TYPES.contains(&pet_type) {
        return Err(invalid(
            "pet_type",
            format!("pet type must be one of {}", KNOWN_PET_TYPES.join(", ")),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
