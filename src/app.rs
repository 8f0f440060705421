//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the input loop, state management, and rendering.

use crate::catalog::{self, EmbeddedEventSource, EventSource, FileEventSource};
use crate::config::Config;
use crate::error::Result;
use crate::input::InputHandler;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Input handler.
    input_handler: InputHandler,
    /// Action sender, for work finished off the main loop.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Where events are loaded from.
    source: Arc<dyn EventSource>,
    /// Configuration.
    config: Config,
}

/// Pick the event source the configuration asks for.
pub fn event_source(config: &Config) -> Arc<dyn EventSource> {
    match &config.catalog.events_path {
        Some(path) => Arc::new(FileEventSource::new(path)),
        None => Arc::new(EmbeddedEventSource),
    }
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut store = Store::with_settings(
            action_tx.clone(),
            config.slip.stake_rules(),
            config.slip.success_message_duration(),
        );

        let source = event_source(&config);
        store.app.source_label = source.describe();

        let input_handler = InputHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        info!(source = %store.app.source_label, "Starting betslip");

        Ok(Self {
            terminal,
            store,
            input_handler,
            action_tx,
            action_rx,
            source,
            config,
        })
    }

    /// Run the application loop.
    pub async fn run(&mut self) -> Result<()> {
        self.handle_action(Action::LoadEvents);

        loop {
            self.input_handler.update_store_snapshot(&self.store);

            let (store, config) = (&self.store, &self.config);
            self.terminal.draw(|frame| {
                Ui::render(frame, store, config);
            })?;

            tokio::select! {
                result = self.input_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if self.store.app.should_quit {
                break;
            }
        }

        info!(
            submissions = self.store.slip.total_submissions(),
            wagered = %self.store.slip.total_amount_wagered(),
            "Exiting betslip"
        );
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        if matches!(action, Action::LoadEvents) {
            self.spawn_load();
        }
        self.store.reduce(action);
    }

    /// Load events in the background; the result comes back as an action.
    fn spawn_load(&self) {
        debug!(source = %self.source.describe(), "Loading events");
        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = catalog::load_action(source.as_ref()).await;
            if let Err(e) = tx.send(action) {
                debug!(error = %e, "Catalog load result dropped");
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_event_source_follows_config() {
        let mut config = Config::default();
        assert_eq!(event_source(&config).describe(), EmbeddedEventSource.describe());

        config.catalog.events_path = Some(PathBuf::from("/data/events.json"));
        assert!(event_source(&config).describe().contains("/data/events.json"));
    }
}
