use crate::remote::{ApiClient, ApiError};

use super::App;

impl App {
    /// Client carrying the current session credential, if any.
    pub(in crate::tui_shell) fn api_client(&mut self) -> Option<ApiClient> {
        let token = match self.session.token() {
            Ok(t) => t,
            Err(err) => {
                self.push_error(format!("read session token: {:#}", err));
                return None;
            }
        };

        match ApiClient::new(self.session.remote().clone(), token) {
            Ok(client) => Some(client),
            Err(err) => {
                self.push_error(format!("init api client: {:#}", err));
                None
            }
        }
    }

    /// Surface an API failure and apply the denied policy. The confirmed pet
    /// list is never touched here.
    pub(in crate::tui_shell) fn surface_api_error(&mut self, what: &str, err: ApiError) {
        let denied = err.is_denied();
        self.push_error(format!("{}: {}", what, err));

        if denied {
            match self.session.observe_denied() {
                Ok(true) => {
                    self.dashboard.pets.clear();
                    self.push_error(format!("{}: access denied; session cleared", what));
                }
                Ok(false) => {}
                Err(err) => self.push_error(format!("apply denied policy: {:#}", err)),
            }
        }
    }
}
