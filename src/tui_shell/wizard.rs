use crate::forms;
use crate::model::KNOWN_PET_TYPES;

use super::{App, TextInputAction};

#[derive(Clone, Debug, Default)]
pub(super) struct LoginWizard {
    pub(super) url: Option<String>,
    pub(super) username: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub(super) struct RegisterWizard {
    pub(super) username: Option<String>,
    pub(super) password: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub(super) struct CreatePetWizard {
    pub(super) name: Option<String>,
}

impl App {
    pub(super) fn cancel_wizards(&mut self) {
        self.login_wizard = None;
        self.register_wizard = None;
        self.create_wizard = None;
    }

    pub(super) fn start_login_wizard(&mut self) {
        self.cancel_wizards();
        self.login_wizard = Some(LoginWizard::default());
        let current = self.session.remote().base_url.clone();
        self.open_text_input_modal(
            "Log in",
            "url> ",
            TextInputAction::LoginUrl,
            Some(current),
            vec!["Backend base URL.".to_string()],
            false,
        );
    }

    pub(super) fn start_register_wizard(&mut self) {
        self.cancel_wizards();
        self.register_wizard = Some(RegisterWizard::default());
        self.open_text_input_modal(
            "Sign up",
            "username> ",
            TextInputAction::RegisterUsername,
            None,
            vec![format!(
                "At least {} characters.",
                forms::MIN_USERNAME_LEN
            )],
            false,
        );
    }

    pub(super) fn start_create_wizard(&mut self) {
        self.cancel_wizards();
        self.create_wizard = Some(CreatePetWizard::default());
        self.open_text_input_modal(
            "New pet",
            "name> ",
            TextInputAction::CreatePetName,
            None,
            vec![format!(
                "Up to {} characters.",
                forms::MAX_PET_NAME_LEN
            )],
            false,
        );
    }

    pub(super) fn continue_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::LoginUrl => {
                let url = value.trim().trim_end_matches('/').to_string();
                if url.is_empty() {
                    self.push_error("url is required".to_string());
                    self.cancel_wizards();
                    return;
                }
                if let Some(w) = self.login_wizard.as_mut() {
                    w.url = Some(url);
                }
                self.open_text_input_modal(
                    "Log in",
                    "username> ",
                    TextInputAction::LoginUsername,
                    None,
                    Vec::new(),
                    false,
                );
            }
            TextInputAction::LoginUsername => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.username = Some(value.trim().to_string());
                }
                self.open_text_input_modal(
                    "Log in",
                    "password> ",
                    TextInputAction::LoginPassword,
                    None,
                    Vec::new(),
                    true,
                );
            }
            TextInputAction::LoginPassword => {
                let Some(wizard) = self.login_wizard.take() else {
                    return;
                };
                let url = wizard.url.unwrap_or_default();
                let username = wizard.username.unwrap_or_default();
                if let Err(err) = forms::validate_login(&username, &value) {
                    self.push_error(err.to_string());
                    return;
                }
                self.login_action(url, username, value);
            }

            TextInputAction::RegisterUsername => {
                if let Some(w) = self.register_wizard.as_mut() {
                    w.username = Some(value.trim().to_string());
                }
                self.open_text_input_modal(
                    "Sign up",
                    "password> ",
                    TextInputAction::RegisterPassword,
                    None,
                    vec![format!(
                        "At least {} characters.",
                        forms::MIN_PASSWORD_LEN
                    )],
                    true,
                );
            }
            TextInputAction::RegisterPassword => {
                if let Some(w) = self.register_wizard.as_mut() {
                    w.password = Some(value);
                }
                self.open_text_input_modal(
                    "Sign up",
                    "confirm password> ",
                    TextInputAction::RegisterConfirm,
                    None,
                    Vec::new(),
                    true,
                );
            }
            TextInputAction::RegisterConfirm => {
                let Some(wizard) = self.register_wizard.take() else {
                    return;
                };
                let username = wizard.username.unwrap_or_default();
                let password = wizard.password.unwrap_or_default();
                if let Err(err) = forms::validate_registration(&username, &password, &value) {
                    self.push_error(err.to_string());
                    return;
                }
                self.register_action(username, password);
            }

            TextInputAction::CreatePetName => {
                if let Some(w) = self.create_wizard.as_mut() {
                    w.name = Some(value.trim().to_string());
                }
                self.open_text_input_modal(
                    "New pet",
                    "type> ",
                    TextInputAction::CreatePetType,
                    None,
                    vec![format!("One of: {}.", KNOWN_PET_TYPES.join(", "))],
                    false,
                );
            }
            TextInputAction::CreatePetType => {
                let Some(wizard) = self.create_wizard.take() else {
                    return;
                };
                let name = wizard.name.unwrap_or_default();
                let pet_type = value.trim().to_uppercase();
                if let Err(err) = forms::validate_new_pet(&name, &pet_type) {
                    self.push_error(err.to_string());
                    return;
                }
                self.create_action(name, pet_type);
            }
        }
    }
}
