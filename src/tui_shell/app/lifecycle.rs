use crate::model::{DEFAULT_BASE_URL, RemoteConfig};
use crate::pending::Pending;
use crate::session::SessionController;
use crate::store::ClientStore;

use super::super::views::{DashboardView, LoginView};
use super::{App, now_stamp};

impl App {
    /// Build the app from the persisted client home. A failed session
    /// restore lands in the banner rather than aborting the TUI.
    pub(in crate::tui_shell) fn load() -> anyhow::Result<Self> {
        let store = ClientStore::open_default()?;
        let cfg = store.read_config()?;
        let remote = cfg.remote.clone().unwrap_or(RemoteConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        });

        let mut session =
            SessionController::new(store.clone(), remote.clone(), cfg.logout_on_denied);
        let restore_err = session.restore().err();

        let mut app = App {
            store,
            session,
            dashboard: DashboardView::default(),
            login_view: LoginView {
                updated_at: now_stamp(),
                remote_url: remote.base_url.clone(),
            },
            pending: Pending::default(),
            banner: None,
            modal: None,
            login_wizard: None,
            register_wizard: None,
            create_wizard: None,
            quit: false,
        };

        if let Some(err) = restore_err {
            app.push_error(format!("restore session: {:#}", err));
        }

        if app.session.status().is_authenticated() {
            app.refresh_pets();
        }

        Ok(app)
    }
}
