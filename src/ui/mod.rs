//! UI rendering using ratatui.
//!
//! Rendering is a pure function of the [`Store`] and the configuration.

mod layout;
mod widgets;

pub use layout::{Layout, centered_rect};
pub use widgets::{
    EventList, HelpPanel, HistoryList, SlipPanel, StatusBar, SuccessPopup, TabBar,
};

use crate::config::Config;
use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config) {
        let keys = &config.keybindings;
        let offset = config.ui.display_offset();
        let layout = Layout::new(frame.area(), config.ui.show_status_bar);

        StatusBar::render(frame, layout.status_area, store, &keys.help);
        TabBar::render(frame, layout.tab_area, store, keys);

        match store.app.current_view {
            View::Events => {
                let (events_area, slip_area) = layout.events_and_slip();
                EventList::render(frame, events_area, store, offset);
                SlipPanel::render(frame, slip_area, store, keys);
            }
            View::History => HistoryList::render(frame, layout.main_area, store, offset),
        }

        SuccessPopup::render(frame, frame.area(), &store.success);

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys);
        }

        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, &keys.back);
        } else if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{sample_event, unlabelled_event};
    use crate::state::Action;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tokio::sync::mpsc;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(store: &Store) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let config = Config::default();
        terminal
            .draw(|frame| Ui::render(frame, store, &config))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn loaded_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx);
        store.reduce(Action::EventsLoaded(vec![sample_event(), unlabelled_event()]));
        store
    }

    #[test]
    fn test_events_view_renders_catalog_and_slip() {
        let mut store = loaded_store();
        store.reduce(Action::ToggleBet {
            event_id: "event-1".to_string(),
            choice_id: "choice-2".to_string(),
        });

        let screen = draw(&store);
        assert!(screen.contains("Championship Final"));
        assert!(screen.contains("(no label)"));
        assert!(screen.contains("25th of December 15:30"));
        assert!(screen.contains("Betting Slip (1)"));
        assert!(screen.contains("Potential gain: 3.50"));
    }

    #[test]
    fn test_history_view_renders_empty_state() {
        let mut store = loaded_store();
        store.reduce(Action::SetView(View::History));
        let screen = draw(&store);
        assert!(screen.contains("History (0)"));
        assert!(screen.contains("No submissions yet"));
    }

    #[test]
    fn test_error_popup_takes_precedence() {
        let mut store = loaded_store();
        store.reduce(Action::SetError("Failed to load events: boom".to_string()));
        let screen = draw(&store);
        assert!(screen.contains("Failed to load events: boom"));
    }
}
