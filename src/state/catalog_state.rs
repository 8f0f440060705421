//! Loaded events and the cursor over them.

use crate::catalog::{self, Choice, Event};
use chrono::{DateTime, Utc};

/// State for the event list.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// All loaded events.
    pub events: Vec<Event>,
    /// Currently highlighted event.
    pub selected_index: Option<usize>,
    /// Highlighted choice within the highlighted event.
    pub choice_index: usize,
    /// Whether events are currently loading.
    pub loading: bool,
    /// Last load timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// Replace the loaded events, keeping the cursor in range.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.loading = false;
        self.last_updated = Some(Utc::now());
        self.selected_index = match self.events.len() {
            0 => None,
            len => Some(self.selected_index.unwrap_or(0).min(len - 1)),
        };
        self.clamp_choice();
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_index.and_then(|i| self.events.get(i))
    }

    pub fn find_event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Choices offered by the highlighted event; empty when it has none.
    pub fn selected_choices(&self) -> &[Choice] {
        self.selected_event()
            .and_then(|event| catalog::bet_choices(event).ok())
            .unwrap_or_default()
    }

    pub fn selected_choice(&self) -> Option<&Choice> {
        self.selected_choices().get(self.choice_index)
    }

    /// Move the choice cursor right, wrapping around.
    pub fn next_choice(&mut self) {
        let count = self.selected_choices().len();
        if count > 0 {
            self.choice_index = (self.choice_index + 1) % count;
        }
    }

    /// Move the choice cursor left, wrapping around.
    pub fn previous_choice(&mut self) {
        let count = self.selected_choices().len();
        if count > 0 {
            self.choice_index = (self.choice_index + count - 1) % count;
        }
    }

    /// Keep the choice cursor inside the highlighted event's choices.
    pub fn clamp_choice(&mut self) {
        let count = self.selected_choices().len();
        self.choice_index = self.choice_index.min(count.saturating_sub(1));
    }
}
