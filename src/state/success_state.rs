//! Success message shown after a submission.
//!
//! The message hides itself after a delay. The delay runs as a tokio task
//! that, when it fires, sends [`Action::ExpireSuccessMessage`] back to the
//! store; the store then calls [`SuccessMessage::expire`]. Only one such
//! task is ever pending: showing the message again or closing it aborts the
//! previous one, and an expiry carrying a stale id is ignored.

use super::{Action, SelectedBet};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long the message stays up unless closed.
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug)]
struct PendingHide {
    id: u64,
    handle: JoinHandle<()>,
}

/// Transient success notification.
#[derive(Debug)]
pub struct SuccessMessage {
    visible: bool,
    bets: Vec<SelectedBet>,
    total: String,
    potential_gain: String,
    duration: Duration,
    pending: Option<PendingHide>,
    next_id: u64,
}

impl Default for SuccessMessage {
    fn default() -> Self {
        Self::new(SUCCESS_MESSAGE_DURATION)
    }
}

impl SuccessMessage {
    /// Create a hidden message that auto-hides after `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            bets: Vec::new(),
            total: String::new(),
            potential_gain: String::new(),
            duration,
            pending: None,
            next_id: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bets shown in the message, copied when it was shown.
    pub fn bets(&self) -> &[SelectedBet] {
        &self.bets
    }

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn potential_gain(&self) -> &str {
        &self.potential_gain
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether an auto-hide is scheduled.
    pub fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }

    /// Show the message and schedule its auto-hide.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(
        &mut self,
        bets: &[SelectedBet],
        total: impl Into<String>,
        potential_gain: impl Into<String>,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) {
        self.cancel_pending();

        self.bets = bets.to_vec();
        self.total = total.into();
        self.potential_gain = potential_gain.into();
        self.visible = true;

        let id = self.next_id;
        self.next_id += 1;

        let tx = action_tx.clone();
        let deadline = tokio::time::Instant::now() + self.duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Err(e) = tx.send(Action::ExpireSuccessMessage(id)) {
                debug!(timer = id, error = %e, "Success message hide dropped");
            }
        });
        self.pending = Some(PendingHide { id, handle });
        debug!(timer = id, "Scheduled success message hide");
    }

    /// Hide now and drop any scheduled hide. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.visible = false;
        self.cancel_pending();
    }

    /// Apply a fired auto-hide. Returns false for a stale timer id.
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            debug!(timer = pending.id, "Cancelled success message hide");
        }
    }
}

impl Drop for SuccessMessage {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
