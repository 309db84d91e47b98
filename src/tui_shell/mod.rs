use anyhow::Result;

mod app;

mod modal;
mod view;
mod views;
mod wizard;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::App;
use modal::{ConfirmAction, Modal, TextInputAction};
use view::{View, render_view_chrome};

pub fn run() -> Result<()> {
    app::run()
}
