use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ConfirmAction {
    DeletePet(u64),
}

/// Which wizard step an open text-input modal feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TextInputAction {
    LoginUrl,
    LoginUsername,
    LoginPassword,
    RegisterUsername,
    RegisterPassword,
    RegisterConfirm,
    CreatePetName,
    CreatePetType,
}

#[derive(Debug)]
pub(super) enum ModalKind {
    Output {
        lines: Vec<String>,
    },
    Confirm {
        prompt: String,
        action: ConfirmAction,
    },
    TextInput {
        prompt: String,
        action: TextInputAction,
        buf: String,
        hints: Vec<String>,
        mask: bool,
    },
}

#[derive(Debug)]
pub(super) struct Modal {
    pub(super) title: String,
    pub(super) kind: ModalKind,
}

impl App {
    pub(super) fn open_output_modal(&mut self, title: &str, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.to_string(),
            kind: ModalKind::Output { lines },
        });
    }

    pub(super) fn open_confirm_modal(&mut self, title: &str, prompt: &str, action: ConfirmAction) {
        self.modal = Some(Modal {
            title: title.to_string(),
            kind: ModalKind::Confirm {
                prompt: prompt.to_string(),
                action,
            },
        });
    }

    pub(super) fn open_text_input_modal(
        &mut self,
        title: &str,
        prompt: &str,
        action: TextInputAction,
        initial: Option<String>,
        hints: Vec<String>,
        mask: bool,
    ) {
        self.modal = Some(Modal {
            title: title.to_string(),
            kind: ModalKind::TextInput {
                prompt: prompt.to_string(),
                action,
                buf: initial.unwrap_or_default(),
                hints,
                mask,
            },
        });
    }
}

enum Verdict {
    Keep,
    Close,
    Cancel,
    Confirm(ConfirmAction),
    Submit(TextInputAction, String),
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(mut modal) = app.modal.take() else {
        return;
    };

    let verdict = match &mut modal.kind {
        ModalKind::Output { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Verdict::Close,
            _ => Verdict::Keep,
        },

        ModalKind::Confirm { action, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Verdict::Confirm(*action),
            KeyCode::Char('n') | KeyCode::Esc => Verdict::Close,
            _ => Verdict::Keep,
        },

        ModalKind::TextInput { action, buf, .. } => match key.code {
            KeyCode::Esc => Verdict::Cancel,
            KeyCode::Enter => Verdict::Submit(*action, buf.clone()),
            KeyCode::Backspace => {
                buf.pop();
                Verdict::Keep
            }
            KeyCode::Char(c) => {
                buf.push(c);
                Verdict::Keep
            }
            _ => Verdict::Keep,
        },
    };

    match verdict {
        Verdict::Keep => app.modal = Some(modal),
        Verdict::Close => {}
        Verdict::Cancel => app.cancel_wizards(),
        Verdict::Confirm(action) => app.run_confirmed_action(action),
        Verdict::Submit(action, value) => app.continue_text_input(action, value),
    }
}

pub(super) fn render_modal(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(modal) = &app.modal else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    match &modal.kind {
        ModalKind::Output { lines: out } => {
            for l in out {
                lines.push(Line::from(l.clone()));
            }
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "Enter/Esc: close",
                Style::default().fg(Color::Gray),
            ));
        }
        ModalKind::Confirm { prompt, .. } => {
            lines.push(Line::from(prompt.clone()));
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "y: confirm   n/Esc: cancel",
                Style::default().fg(Color::Gray),
            ));
        }
        ModalKind::TextInput {
            prompt,
            buf,
            hints,
            mask,
            ..
        } => {
            let shown = if *mask {
                "*".repeat(buf.chars().count())
            } else {
                buf.clone()
            };
            lines.push(Line::from(format!("{}{}_", prompt, shown)));
            if !hints.is_empty() {
                lines.push(Line::from(""));
                for h in hints {
                    lines.push(Line::styled(h.clone(), Style::default().fg(Color::Gray)));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "Enter: next   Esc: cancel",
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let width = area.width.saturating_sub(8).min(64).max(20);
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(modal.title.clone()),
            ),
        rect,
    );
}
