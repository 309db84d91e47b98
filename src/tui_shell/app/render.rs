use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::{RouteDecision, route};

use super::super::{View, modal};
use super::App;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let who = match app.session.status().identity() {
        Some(identity) => identity.subject_name.clone(),
        None => "not signed in".to_string(),
    };
    let header = Line::from(vec![
        Span::styled(
            "petshell",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.session.remote().base_url.clone(),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(who, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(header), parts[0]);

    // The route guard decides what may render in the protected area.
    match route(app.session.status()) {
        RouteDecision::RenderProtected => app.dashboard.render(frame, parts[1]),
        RouteDecision::Spinner => {
            frame.render_widget(
                Paragraph::new("Checking session...")
                    .style(Style::default().fg(Color::Gray)),
                parts[1],
            );
        }
        RouteDecision::RedirectToLogin => app.login_view.render(frame, parts[1]),
    }

    if let Some((message, is_error)) = &app.banner {
        let style = if *is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(Paragraph::new(message.clone()).style(style), parts[2]);
    }

    let hints = match route(app.session.status()) {
        RouteDecision::RenderProtected => {
            "up/down select   f feed   t train   n new   d delete   r refresh   w identity   L log out   q quit"
        }
        RouteDecision::Spinner => "q quit",
        RouteDecision::RedirectToLogin => "l log in   s sign up   q quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        parts[3],
    );

    modal::render_modal(frame, app, area);
}
