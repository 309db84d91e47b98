mod dashboard;
mod login;

pub(in crate::tui_shell) use dashboard::DashboardView;
pub(in crate::tui_shell) use login::LoginView;
