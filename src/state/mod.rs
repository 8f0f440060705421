//! State management for Betslip.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. The [`Store`] is
//! built and owned by the application; everything else talks to it through
//! [`Action`]s.

mod app_state;
mod catalog_state;
mod slip_state;
mod success_state;

pub use app_state::{AppState, Focus, InputMode, View};
pub use catalog_state::CatalogState;
pub use slip_state::{
    BettingSlip, DEFAULT_STAKE, MIN_STAKE, STAKE_STEP, SelectedBet, StakeInput, StakeRules,
    SubmissionRecord, bet_key, format_amount, round_cents,
};
pub use success_state::{SUCCESS_MESSAGE_DURATION, SuccessMessage};

use crate::catalog::Event;
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    ToggleFocus,

    // Catalog actions
    LoadEvents,
    EventsLoaded(Vec<Event>),
    NextChoice,
    PreviousChoice,

    // Slip actions
    ToggleBet { event_id: String, choice_id: String },
    RemoveBet(String),
    IncreaseStake,
    DecreaseStake,
    UpdateStake(String),
    ResetStake,
    ClearAllBets,
    SubmitBets,
    ClearHistory,

    // Success message
    CloseSuccessMessage,
    ExpireSuccessMessage(u64),

    // Stake input
    BeginStakeEdit,
    InputChar(char),
    InputBackspace,
    InputCursorLeft,
    InputCursorRight,
    CommitInput,
    CancelInput,

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Error handling
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub shown_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            shown_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Whether the notification has been up for its full duration.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The application state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Loaded events.
    pub catalog: CatalogState,
    /// The betting slip.
    pub slip: BettingSlip,
    /// Success message shown after a submission.
    pub success: SuccessMessage,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with default stake rules.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self::with_settings(action_tx, StakeRules::default(), SUCCESS_MESSAGE_DURATION)
    }

    /// Create a new store with explicit stake rules and message duration.
    pub fn with_settings(
        action_tx: mpsc::UnboundedSender<Action>,
        rules: StakeRules,
        success_duration: Duration,
    ) -> Self {
        Self {
            app: AppState::default(),
            catalog: CatalogState::default(),
            slip: BettingSlip::new(rules),
            success: SuccessMessage::new(success_duration),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| Error::channel(e.to_string()))
    }

    /// Toggle a bet identified by event and choice ids.
    pub fn toggle_bet(&mut self, event_id: &str, choice_id: &str) -> Result<()> {
        let event = self
            .catalog
            .find_event(event_id)
            .ok_or_else(|| Error::invalid_input(format!("unknown event {}", event_id)))?;
        let choice = event.find_choice(choice_id).ok_or_else(|| {
            Error::invalid_input(format!("unknown choice {} on event {}", choice_id, event_id))
        })?;
        self.slip.toggle_bet(event, choice)
    }

    /// Submit the slip and show the success message.
    pub fn submit_bets(&mut self) -> Result<SubmissionRecord> {
        let record = self.slip.submit_bets()?;
        info!(
            id = %record.id,
            bets = record.bets.len(),
            amount = %record.amount,
            total = %record.total,
            potential_gain = %record.potential_gain,
            timestamp = %record.timestamp_iso(),
            "Submitting bets"
        );
        self.success.show(
            &record.bets,
            record.total.clone(),
            record.potential_gain.clone(),
            &self.action_tx,
        );
        Ok(record)
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,
            Action::ToggleFocus => self.app.focus = self.app.focus.toggled(),

            // Catalog actions
            Action::LoadEvents => {
                self.catalog.loading = true;
                self.app.loading = true;
            }
            Action::EventsLoaded(events) => {
                self.catalog.set_events(events);
                self.app.loading = false;
            }
            Action::NextChoice => self.catalog.next_choice(),
            Action::PreviousChoice => self.catalog.previous_choice(),

            // Slip actions
            Action::ToggleBet {
                event_id,
                choice_id,
            } => match self.toggle_bet(&event_id, &choice_id) {
                Ok(()) => debug!(
                    event_id = %event_id,
                    choice_id = %choice_id,
                    selected = self.slip.is_selected(&event_id, &choice_id),
                    "Toggled bet"
                ),
                Err(e) => self.reject(e),
            },
            Action::RemoveBet(key) => {
                if self.slip.remove_bet(&key) {
                    debug!(key = %key, "Removed bet");
                }
            }
            Action::IncreaseStake => self.slip.increase_bet_amount(),
            Action::DecreaseStake => self.slip.decrease_bet_amount(),
            Action::UpdateStake(raw) => self.update_stake(raw),
            Action::ResetStake => self.slip.reset_bet_amount(),
            Action::ClearAllBets => {
                self.slip.clear_all_bets();
                debug!("Cleared slip");
            }
            Action::SubmitBets => {
                if let Err(e) = self.submit_bets() {
                    self.reject(e);
                }
            }
            Action::ClearHistory => self.slip.clear_submission_history(),

            // Success message
            Action::CloseSuccessMessage => self.success.close(),
            Action::ExpireSuccessMessage(id) => {
                if !self.success.expire(id) {
                    debug!(timer = id, "Ignored stale success message hide");
                }
            }

            // Stake input
            Action::BeginStakeEdit => {
                let current = self.slip.bet_amount().to_string();
                self.app.begin_input(InputMode::EditStake, current);
            }
            Action::InputChar(c) => {
                if self.app.is_editing() {
                    self.app.push_char(c);
                }
            }
            Action::InputBackspace => self.app.pop_char(),
            Action::InputCursorLeft => self.app.cursor_left(),
            Action::InputCursorRight => self.app.cursor_right(),
            Action::CommitInput => {
                let mode = self.app.input_mode;
                let input = self.app.take_input();
                if mode == InputMode::EditStake {
                    self.update_stake(input);
                }
            }
            Action::CancelInput => {
                self.app.take_input();
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-10),
            Action::PageDown => self.scroll(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }
            Action::Tick => {
                let now = Instant::now();
                if self
                    .app
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(now))
                {
                    self.app.notification = None;
                }
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
                self.app.loading = false;
                self.catalog.loading = false;
            }
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn update_stake(&mut self, raw: String) {
        if self.slip.update_bet_amount(raw.as_str()) {
            debug!(stake = %self.slip.bet_amount(), "Updated stake");
        } else {
            debug!(input = %raw, stake = %self.slip.bet_amount(), "Ignored stake input");
        }
    }

    fn reject(&mut self, error: Error) {
        if error.is_data_contract_violation() {
            error!(error = %error, "Event data violates the catalog contract");
        } else {
            warn!(error = %error, "Rejected slip operation");
        }
        self.app.notification = Some(Notification::warning(error.to_string()));
    }

    fn scroll(&mut self, delta: i32) {
        match (self.app.current_view, self.app.focus) {
            (View::Events, Focus::Events) => {
                let current = self.catalog.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.catalog.events.len().saturating_sub(1);
                self.catalog.selected_index = Some(new_index.min(max_index));
                self.catalog.clamp_choice();
            }
            (View::Events, Focus::Slip) => {
                if !self.slip.has_bets() {
                    return;
                }
                let current = self.slip.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.slip.bet_count().saturating_sub(1);
                self.slip.selected_index = Some(new_index.min(max_index));
            }
            (View::History, _) => {
                let current = self.slip.history_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.slip.total_submissions().saturating_sub(1);
                self.slip.history_index = Some(new_index.min(max_index));
            }
        }
    }

    fn go_to_top(&mut self) {
        match (self.app.current_view, self.app.focus) {
            (View::Events, Focus::Events) => {
                self.catalog.selected_index = Some(0);
                self.catalog.clamp_choice();
            }
            (View::Events, Focus::Slip) if self.slip.has_bets() => {
                self.slip.selected_index = Some(0)
            }
            (View::History, _) => self.slip.history_index = Some(0),
            _ => {}
        }
    }

    fn go_to_bottom(&mut self) {
        match (self.app.current_view, self.app.focus) {
            (View::Events, Focus::Events) => {
                let max = self.catalog.events.len().saturating_sub(1);
                self.catalog.selected_index = Some(max);
                self.catalog.clamp_choice();
            }
            (View::Events, Focus::Slip) if self.slip.has_bets() => {
                self.slip.selected_index = Some(self.slip.bet_count() - 1);
            }
            (View::History, _) => {
                let max = self.slip.total_submissions().saturating_sub(1);
                self.slip.history_index = Some(max);
            }
            _ => {}
        }
    }
}
