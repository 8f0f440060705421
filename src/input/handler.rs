//! Turns terminal input into store actions.

use super::InputEvent;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Focus, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct InputHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
    /// Store state needed for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for input handling.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    focus: Focus,
    show_help: bool,
    success_visible: bool,
    has_error: bool,
    has_notification: bool,
    /// Event and choice under the cursor in the event list.
    highlighted: Option<(String, String)>,
    /// Key of the bet under the cursor in the slip.
    selected_bet_key: Option<String>,
}

impl InputHandler {
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware input handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        let highlighted = store
            .catalog
            .selected_event()
            .zip(store.catalog.selected_choice())
            .map(|(event, choice)| (event.id.clone(), choice.id.clone()));

        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            focus: store.app.focus,
            show_help: store.app.show_help,
            success_visible: store.success.is_visible(),
            has_error: store.app.error.is_some(),
            has_notification: store.app.notification.is_some(),
            highlighted,
            selected_bet_key: store.slip.selected_bet().map(|b| b.key.clone()),
        });
    }

    /// Get the next action from user input, or a tick when none arrives.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Action::Tick));
        }

        match event::read()? {
            CrosstermEvent::Key(key) => Ok(self.handle_key(key)),
            CrosstermEvent::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            // Resizes are picked up by the next draw.
            _ => Ok(None),
        }
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::EditStake => self.handle_edit_mode(key),
        }
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);
        let keys = &self.keybindings;

        if snapshot.show_help {
            return (input.matches(&keys.help) || input.matches(&keys.back))
                .then_some(Action::ToggleHelp);
        }

        if input.matches(&keys.back) {
            return if snapshot.success_visible {
                Some(Action::CloseSuccessMessage)
            } else if snapshot.has_error {
                Some(Action::ClearError)
            } else if snapshot.has_notification {
                Some(Action::DismissNotification)
            } else {
                None
            };
        }

        // Global shortcuts
        if input.matches(&keys.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&keys.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&keys.refresh) {
            return Some(Action::LoadEvents);
        }

        // View switching
        if input.matches(&keys.events) {
            return Some(Action::SetView(View::Events));
        }
        if input.matches(&keys.history) {
            return Some(Action::SetView(View::History));
        }

        // Navigation
        if input.matches(&keys.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&keys.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        match key.code {
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            _ => {}
        }

        // Stake and slip, reachable from either panel
        if input.matches(&keys.increase_stake) {
            return Some(Action::IncreaseStake);
        }
        if input.matches(&keys.decrease_stake) {
            return Some(Action::DecreaseStake);
        }
        if input.matches(&keys.reset_stake) {
            return Some(Action::ResetStake);
        }
        if input.matches(&keys.edit_stake) {
            return Some(Action::BeginStakeEdit);
        }
        if input.matches(&keys.submit) {
            return Some(Action::SubmitBets);
        }
        if input.matches(&keys.clear_slip) {
            return Some(Action::ClearAllBets);
        }

        match snapshot.current_view {
            View::Events => self.handle_events_view(key, snapshot),
            View::History => self.handle_history_view(key),
        }
    }

    fn handle_events_view(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);
        let keys = &self.keybindings;

        if input.matches(&keys.focus) {
            return Some(Action::ToggleFocus);
        }

        match snapshot.focus {
            Focus::Events => {
                if input.matches(&keys.left) || key.code == KeyCode::Left {
                    return Some(Action::PreviousChoice);
                }
                if input.matches(&keys.right) || key.code == KeyCode::Right {
                    return Some(Action::NextChoice);
                }
                if input.matches(&keys.select) || input.matches("Space") {
                    let (event_id, choice_id) = snapshot.highlighted.clone()?;
                    return Some(Action::ToggleBet {
                        event_id,
                        choice_id,
                    });
                }
                None
            }
            Focus::Slip => {
                if input.matches(&keys.remove_bet) || key.code == KeyCode::Delete {
                    return snapshot.selected_bet_key.clone().map(Action::RemoveBet);
                }
                None
            }
        }
    }

    fn handle_history_view(&self, key: KeyEvent) -> Option<Action> {
        let input = InputEvent::from(key);

        if input.matches(&self.keybindings.clear_history) {
            return Some(Action::ClearHistory);
        }

        None
    }

    fn handle_edit_mode(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CancelInput),
            KeyCode::Enter => Some(Action::CommitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Left => Some(Action::InputCursorLeft),
            KeyCode::Right => Some(Action::InputCursorRight),
            KeyCode::Char(c) if !c.is_control() => Some(Action::InputChar(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{sample_event, unlabelled_event};
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx);
        store.reduce(Action::EventsLoaded(vec![sample_event(), unlabelled_event()]));
        store
    }

    fn handler_for(store: &Store) -> InputHandler {
        let mut handler = InputHandler::new(KeyBindings::default(), Duration::from_millis(250));
        handler.update_store_snapshot(store);
        handler
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_no_snapshot_no_action() {
        let handler = InputHandler::new(KeyBindings::default(), Duration::from_millis(250));
        assert!(handler.handle_key(key(KeyCode::Char('q'))).is_none());
    }

    #[test]
    fn test_global_keys() {
        let handler = handler_for(&store());
        assert!(matches!(handler.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(matches!(handler.handle_key(key(KeyCode::Char('?'))), Some(Action::ToggleHelp)));
        assert!(matches!(handler.handle_key(key(KeyCode::Char('r'))), Some(Action::LoadEvents)));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('2'))),
            Some(Action::SetView(View::History))
        ));
        assert!(matches!(handler.handle_key(key(KeyCode::Char('s'))), Some(Action::SubmitBets)));
        assert!(matches!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Some(Action::IncreaseStake)
        ));
        assert!(matches!(handler.handle_key(key(KeyCode::Char('0'))), Some(Action::ResetStake)));
    }

    #[test]
    fn test_enter_toggles_highlighted_choice() {
        let mut store = store();
        store.reduce(Action::NextChoice);
        let handler = handler_for(&store);

        match handler.handle_key(key(KeyCode::Enter)) {
            Some(Action::ToggleBet {
                event_id,
                choice_id,
            }) => {
                assert_eq!(event_id, "event-1");
                assert_eq!(choice_id, "choice-2");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_enter_without_events_does_nothing() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let handler = handler_for(&Store::new(tx));
        assert!(handler.handle_key(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_remove_uses_selected_slip_bet() {
        let mut store = store();
        store.reduce(Action::ToggleBet {
            event_id: "event-1".to_string(),
            choice_id: "choice-3".to_string(),
        });
        store.reduce(Action::ToggleFocus);
        store.reduce(Action::GoToTop);
        let handler = handler_for(&store);

        match handler.handle_key(key(KeyCode::Char('d'))) {
            Some(Action::RemoveBet(key)) => assert_eq!(key, "event-1-choice-3"),
            other => panic!("unexpected action: {:?}", other),
        }
        // Choice keys do nothing while the slip has focus.
        assert!(handler.handle_key(key(KeyCode::Char('l'))).is_none());
    }

    #[test]
    fn test_escape_closes_success_first() {
        let mut snapshot = StoreSnapshot {
            success_visible: true,
            has_error: true,
            ..Default::default()
        };
        let mut handler = InputHandler::new(KeyBindings::default(), Duration::from_millis(250));
        handler.store_snapshot = Some(snapshot.clone());
        assert!(matches!(
            handler.handle_key(key(KeyCode::Esc)),
            Some(Action::CloseSuccessMessage)
        ));

        snapshot.success_visible = false;
        handler.store_snapshot = Some(snapshot);
        assert!(matches!(handler.handle_key(key(KeyCode::Esc)), Some(Action::ClearError)));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        let handler = handler_for(&store);
        assert!(handler.handle_key(key(KeyCode::Char('q'))).is_none());
        assert!(matches!(handler.handle_key(key(KeyCode::Esc)), Some(Action::ToggleHelp)));
    }

    #[test]
    fn test_edit_mode_keys() {
        let mut store = store();
        store.reduce(Action::BeginStakeEdit);
        let handler = handler_for(&store);

        assert!(matches!(handler.handle_key(key(KeyCode::Char('q'))), Some(Action::InputChar('q'))));
        assert!(matches!(handler.handle_key(key(KeyCode::Enter)), Some(Action::CommitInput)));
        assert!(matches!(handler.handle_key(key(KeyCode::Esc)), Some(Action::CancelInput)));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Backspace)),
            Some(Action::InputBackspace)
        ));
    }

    #[test]
    fn test_history_view_clear() {
        let mut store = store();
        store.reduce(Action::SetView(View::History));
        let handler = handler_for(&store);
        assert!(matches!(handler.handle_key(key(KeyCode::Char('x'))), Some(Action::ClearHistory)));
        assert!(handler.handle_key(key(KeyCode::Tab)).is_none());
    }
}
