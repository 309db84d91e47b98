use crate::pending::Pending;
use crate::session::SessionController;
use crate::store::ClientStore;

use super::super::Modal;
use super::super::views::{DashboardView, LoginView};
use super::super::wizard::{CreatePetWizard, LoginWizard, RegisterWizard};

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) store: ClientStore,
    pub(in crate::tui_shell) session: SessionController,

    pub(in crate::tui_shell) dashboard: DashboardView,
    pub(in crate::tui_shell) login_view: LoginView,

    pub(in crate::tui_shell) pending: Pending,

    /// Per-action result line: message and whether it is an error.
    pub(in crate::tui_shell) banner: Option<(String, bool)>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) login_wizard: Option<LoginWizard>,
    pub(in crate::tui_shell) register_wizard: Option<RegisterWizard>,
    pub(in crate::tui_shell) create_wizard: Option<CreatePetWizard>,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn push_info(&mut self, message: String) {
        self.banner = Some((message, false));
    }

    pub(in crate::tui_shell) fn push_error(&mut self, message: String) {
        self.banner = Some((message, true));
    }
}
