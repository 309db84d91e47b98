use crate::care;
use crate::model::{PetType, RemoteConfig};
use crate::remote::ApiClient;
use crate::session::SessionController;

use super::super::ConfirmAction;
use super::{App, now_stamp};

impl App {
    pub(in crate::tui_shell) fn refresh_pets(&mut self) {
        let Some(api) = self.api_client() else {
            return;
        };
        match api.my_pets() {
            Ok(pets) => {
                self.dashboard.set_pets(pets, now_stamp());
            }
            Err(err) => self.surface_api_error("load pets", err),
        }
    }

    pub(in crate::tui_shell) fn feed_selected(&mut self) {
        let Some(pet) = self.dashboard.selected_pet().cloned() else {
            return;
        };
        if !self.pending.begin(pet.id) {
            self.push_error(format!("{}: another action is still in flight", pet.name));
            return;
        }

        let plan = care::plan_feed(&pet);
        if let Some(api) = self.api_client() {
            match api.update_pet(pet.id, &plan) {
                Ok(updated) => {
                    self.dashboard.replace_pet(updated);
                    self.dashboard.updated_at = now_stamp();
                    self.push_info(format!("Fed {}", pet.name));
                }
                Err(err) => self.surface_api_error("feed", err),
            }
        }
        self.pending.finish(pet.id);
    }

    pub(in crate::tui_shell) fn train_selected(&mut self) {
        let Some(pet) = self.dashboard.selected_pet().cloned() else {
            return;
        };
        if !self.pending.begin(pet.id) {
            self.push_error(format!("{}: another action is still in flight", pet.name));
            return;
        }

        let plan = care::plan_train(&pet);
        if let Some(api) = self.api_client() {
            match api.update_pet(pet.id, &plan) {
                Ok(updated) => {
                    self.dashboard.replace_pet(updated);
                    self.dashboard.updated_at = now_stamp();
                    self.push_info(format!("Trained {}", pet.name));
                }
                Err(err) => self.surface_api_error("train", err),
            }
        }
        self.pending.finish(pet.id);
    }

    pub(in crate::tui_shell) fn request_delete_selected(&mut self) {
        let Some(pet) = self.dashboard.selected_pet() else {
            return;
        };
        let (pet_id, name) = (pet.id, pet.name.clone());
        let prompt = format!("Delete {}?", name);
        self.open_confirm_modal("Delete pet", &prompt, ConfirmAction::DeletePet(pet_id));
    }

    pub(in crate::tui_shell) fn run_confirmed_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeletePet(pet_id) => self.delete_pet(pet_id),
        }
    }

    fn delete_pet(&mut self, pet_id: u64) {
        if !self.pending.begin(pet_id) {
            self.push_error("another action is still in flight for this pet".to_string());
            return;
        }

        if let Some(api) = self.api_client() {
            match api.delete_pet(pet_id) {
                Ok(()) => {
                    self.dashboard.remove_pet(pet_id);
                    self.dashboard.updated_at = now_stamp();
                    self.push_info("Pet deleted".to_string());
                }
                Err(err) => self.surface_api_error("delete", err),
            }
        }
        self.pending.finish(pet_id);
    }

    pub(in crate::tui_shell) fn create_action(&mut self, name: String, pet_type: String) {
        if !self.pending.begin_create() {
            self.push_error("a create is already in flight".to_string());
            return;
        }

        let pet_type = PetType::from(pet_type);
        if let Some(api) = self.api_client() {
            match api.create_pet(&name, &pet_type) {
                Ok(pet) => {
                    self.push_info(format!("Created {} ({})", pet.name, pet.id));
                    self.dashboard.replace_pet(pet);
                    self.dashboard.updated_at = now_stamp();
                }
                Err(err) => self.surface_api_error("create pet", err),
            }
        }
        self.pending.finish_create();
    }

    pub(in crate::tui_shell) fn login_action(
        &mut self,
        url: String,
        username: String,
        password: String,
    ) {
        let remote = RemoteConfig {
            base_url: url.clone(),
        };

        let mut cfg = match self.store.read_config() {
            Ok(c) => c,
            Err(err) => {
                self.push_error(format!("read config: {:#}", err));
                return;
            }
        };
        cfg.remote = Some(remote.clone());
        if let Err(err) = self.store.write_config(&cfg) {
            self.push_error(format!("write config: {:#}", err));
            return;
        }

        self.session =
            SessionController::new(self.store.clone(), remote.clone(), cfg.logout_on_denied);
        self.login_view.remote_url = url;
        self.login_view.updated_at = now_stamp();

        let api = match ApiClient::new(remote, None) {
            Ok(api) => api,
            Err(err) => {
                self.push_error(format!("init api client: {:#}", err));
                return;
            }
        };

        match self.session.login(&api, &username, &password) {
            Ok(()) => {
                self.push_info(format!("Logged in as {}", username));
                self.refresh_pets();
            }
            Err(err) => self.push_error(format!("{:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn register_action(&mut self, username: String, password: String) {
        let roles = vec!["USER".to_string()];

        let api = match ApiClient::new(self.session.remote().clone(), None) {
            Ok(api) => api,
            Err(err) => {
                self.push_error(format!("init api client: {:#}", err));
                return;
            }
        };

        match self.session.register(&api, &username, &password, &roles) {
            Ok(()) => {
                self.push_info(format!("Registered and logged in as {}", username));
                self.refresh_pets();
            }
            Err(err) => self.push_error(format!("{:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn logout_action(&mut self) {
        match self.session.logout() {
            Ok(()) => {
                self.dashboard.pets.clear();
                self.login_view.updated_at = now_stamp();
                self.push_info("Logged out".to_string());
            }
            Err(err) => self.push_error(format!("log out: {:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn show_identity_modal(&mut self) {
        let Some(identity) = self.session.status().identity().cloned() else {
            self.push_error("not signed in".to_string());
            return;
        };

        let mut lines = vec![format!("user: {}", identity.subject_name)];
        lines.push(format!(
            "roles: {}",
            identity
                .roles
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
        lines.push(format!(
            "permissions: {}",
            identity
                .permissions
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
        self.open_output_modal("Identity", lines);
    }
}
