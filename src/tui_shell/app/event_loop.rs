use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::session::{RouteDecision, route};

use super::super::{View, modal};
use super::{App, render};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    let decision = route(app.session.status());

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }

        KeyCode::Char('l') if decision == RouteDecision::RedirectToLogin => {
            app.start_login_wizard();
        }
        KeyCode::Char('s') if decision == RouteDecision::RedirectToLogin => {
            app.start_register_wizard();
        }

        KeyCode::Up if decision == RouteDecision::RenderProtected => {
            app.dashboard.move_up();
        }
        KeyCode::Down if decision == RouteDecision::RenderProtected => {
            app.dashboard.move_down();
        }

        KeyCode::Char('r') if decision == RouteDecision::RenderProtected => {
            app.refresh_pets();
        }
        KeyCode::Char('f') if decision == RouteDecision::RenderProtected => {
            app.feed_selected();
        }
        KeyCode::Char('t') if decision == RouteDecision::RenderProtected => {
            app.train_selected();
        }
        KeyCode::Char('d') if decision == RouteDecision::RenderProtected => {
            app.request_delete_selected();
        }
        KeyCode::Char('n') if decision == RouteDecision::RenderProtected => {
            app.start_create_wizard();
        }
        KeyCode::Char('w') if decision == RouteDecision::RenderProtected => {
            app.show_identity_modal();
        }
        KeyCode::Char('L') if decision == RouteDecision::RenderProtected => {
            app.logout_action();
        }

        _ => {}
    }
}
