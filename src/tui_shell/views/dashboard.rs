use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph};

use crate::care;
use crate::model::Pet;

use super::super::{View, render_view_chrome};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct DashboardView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) pets: Vec<Pet>,
    pub(in crate::tui_shell) selected: usize,
}

impl DashboardView {
    pub(in crate::tui_shell) fn selected_pet(&self) -> Option<&Pet> {
        self.pets.get(self.selected.min(self.pets.len().saturating_sub(1)))
    }

    pub(in crate::tui_shell) fn set_pets(&mut self, pets: Vec<Pet>, updated_at: String) {
        self.pets = pets;
        self.updated_at = updated_at;
        if !self.pets.is_empty() {
            self.selected = self.selected.min(self.pets.len() - 1);
        } else {
            self.selected = 0;
        }
    }

    /// Replace a cached record wholesale with the authoritative response.
    pub(in crate::tui_shell) fn replace_pet(&mut self, pet: Pet) {
        match self.pets.iter_mut().find(|p| p.id == pet.id) {
            Some(slot) => *slot = pet,
            None => self.pets.push(pet),
        }
    }

    pub(in crate::tui_shell) fn remove_pet(&mut self, pet_id: u64) {
        self.pets.retain(|p| p.id != pet_id);
        if !self.pets.is_empty() {
            self.selected = self.selected.min(self.pets.len() - 1);
        } else {
            self.selected = 0;
        }
    }
}

fn energy_color(energy: u8) -> Color {
    if energy > 50 {
        Color::Green
    } else if energy > 20 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn hunger_color(hunger: u8) -> Color {
    if hunger < 50 {
        Color::Green
    } else if hunger < 80 {
        Color::Yellow
    } else {
        Color::Red
    }
}

impl View for DashboardView {
    fn title(&self) -> &str {
        "My pets"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.pets.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.pets.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(8)])
            .split(inner);

        let mut state = ListState::default();
        if !self.pets.is_empty() {
            state.select(Some(self.selected.min(self.pets.len() - 1)));
        }

        let mut rows = Vec::new();
        for pet in &self.pets {
            rows.push(ListItem::new(format!(
                "{:<20} {:<10} {:<10} E:{:>3}% H:{:>3}%",
                pet.name, pet.pet_type, pet.mood, pet.energy_level, pet.hunger_level
            )));
        }
        if self.pets.is_empty() {
            rows.push(ListItem::new(
                "(no pets yet; press n to create one)",
            ));
        }

        let list = List::new(rows)
            .block(Block::default().borders(Borders::BOTTOM))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, parts[0], &mut state);

        let Some(pet) = self.selected_pet() else {
            return;
        };

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
            ])
            .split(parts[1]);

        frame.render_widget(
            Paragraph::new(format!(
                "{}  type: {}  mood: {}",
                pet.name, pet.pet_type, pet.mood
            )),
            detail[0],
        );
        frame.render_widget(
            Paragraph::new(format!(
                "sprite: {}",
                care::sprite_name(&pet.pet_type, pet.energy_level)
            ))
            .style(Style::default().fg(Color::Gray)),
            detail[1],
        );

        let energy = Gauge::default()
            .block(Block::default().title("energy"))
            .gauge_style(Style::default().fg(energy_color(pet.energy_level)))
            .percent(u16::from(pet.energy_level.min(100)));
        frame.render_widget(energy, detail[2]);

        let hunger = Gauge::default()
            .block(Block::default().title("hunger"))
            .gauge_style(Style::default().fg(hunger_color(pet.hunger_level)))
            .percent(u16::from(pet.hunger_level.min(100)));
        frame.render_widget(hunger, detail[3]);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/dashboard_tests.rs"]
mod tests;
