use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use super::super::{View, render_view_chrome};

/// Shown whenever the route guard redirects away from the dashboard.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct LoginView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) remote_url: String,
}

impl View for LoginView {
    fn title(&self) -> &str {
        "Sign in"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let lines = vec![
            "You are not signed in.".to_string(),
            String::new(),
            format!("remote: {}", self.remote_url),
            String::new(),
            "l  log in".to_string(),
            "s  sign up".to_string(),
            "q  quit".to_string(),
        ];
        frame.render_widget(
            Paragraph::new(lines.join("\n")).style(Style::default().fg(Color::Gray)),
            inner,
        );
    }
}
