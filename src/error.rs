//! Error types for the Betslip application.

use thiserror::Error;

/// The main error type for Betslip.
#[derive(Error, Debug)]
pub enum Error {
    /// Submit was requested with nothing on the slip.
    #[error("No bets selected")]
    EmptySelection,

    /// The first bet group of an event has no choice list.
    #[error("Event has no valid bet data (event {event_id})")]
    MissingBetData { event_id: String },

    /// The first bet group of an event has no question.
    #[error("Event has no valid bet question (event {event_id})")]
    MissingBetQuestion { event_id: String },

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Event catalog contract violations
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new missing bet data error for an event.
    pub fn missing_bet_data(event_id: impl Into<String>) -> Self {
        Self::MissingBetData {
            event_id: event_id.into(),
        }
    }

    /// Create a new missing bet question error for an event.
    pub fn missing_bet_question(event_id: impl Into<String>) -> Self {
        Self::MissingBetQuestion {
            event_id: event_id.into(),
        }
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the upstream event data is malformed.
    pub fn is_data_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingBetData { .. } | Self::MissingBetQuestion { .. } | Self::Catalog(_)
        )
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_message() {
        assert_eq!(Error::EmptySelection.to_string(), "No bets selected");
    }

    #[test]
    fn test_data_contract_violations() {
        assert!(Error::missing_bet_data("event-1").is_data_contract_violation());
        assert!(Error::missing_bet_question("event-1").is_data_contract_violation());
        assert!(!Error::EmptySelection.is_data_contract_violation());
        assert!(!Error::config("bad").is_data_contract_violation());
    }
}
