//! Event sources.

use super::Event;
use crate::error::{Error, Result};
use crate::state::Action;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

/// Sample catalog bundled with the binary.
const EMBEDDED_EVENTS: &str = include_str!("../../data/events.json");

/// Something that can produce the list of events to bet on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Short description for logs and the status bar.
    fn describe(&self) -> String;

    /// Load all events.
    async fn load_events(&self) -> Result<Vec<Event>>;
}

/// Reads a JSON array of events from disk.
#[derive(Debug, Clone)]
pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for FileEventSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_events(&self) -> Result<Vec<Event>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_events(&content)
    }
}

/// The sample catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedEventSource;

#[async_trait]
impl EventSource for EmbeddedEventSource {
    fn describe(&self) -> String {
        "bundled sample events".to_string()
    }

    async fn load_events(&self) -> Result<Vec<Event>> {
        parse_events(EMBEDDED_EVENTS)
    }
}

/// Parse and validate a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    validate_events(&events)?;
    Ok(events)
}

/// Every choice odd must be strictly positive.
pub fn validate_events(events: &[Event]) -> Result<()> {
    for event in events {
        for (group_id, group) in event.bet.iter() {
            for choice in group.choices.iter().flatten() {
                if choice.odd.is_sign_negative() || choice.odd.is_zero() {
                    return Err(Error::catalog(format!(
                        "event {} bet group {} choice {} has non-positive odd {}",
                        event.id, group_id, choice.id, choice.odd
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Load events and turn the outcome into the action the store should apply.
pub async fn load_action(source: &dyn EventSource) -> Action {
    match source.load_events().await {
        Ok(events) => {
            info!(
                source = %source.describe(),
                count = events.len(),
                "Loaded events"
            );
            Action::EventsLoaded(events)
        }
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "Failed to load events");
            Action::SetError(format!("Failed to load events: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let events = tokio_test::block_on(EmbeddedEventSource.load_events()).unwrap();
        assert!(!events.is_empty());
        for event in &events {
            assert!(super::super::bet_choices(event).is_ok(), "{}", event.id);
            assert!(super::super::bet_question(event).is_ok(), "{}", event.id);
        }
    }

    #[test]
    fn test_rejects_non_positive_odd() {
        let json = r#"[{
            "id": "event-9",
            "label": "Bad odds",
            "start": "2024-12-25T15:30:00Z",
            "sport": { "label": "Football" },
            "category": { "label": "League" },
            "competition": { "label": "Cup" },
            "bet": { "b1": {
                "question": { "label": "Winner?" },
                "choices": [{ "id": "c1", "actor": { "label": "A" }, "odd": 0 }]
            } }
        }]"#;
        let err = parse_events(json).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
        assert!(err.to_string().contains("c1"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_events("{ not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source_reads_events() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_EVENTS.as_bytes()).unwrap();

        let source = FileEventSource::new(file.path());
        let events = source.load_events().await.unwrap();
        assert_eq!(events, parse_events(EMBEDDED_EVENTS).unwrap());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileEventSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.load_events().await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_load_action_success() {
        let mut source = MockEventSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_load_events()
            .times(1)
            .returning(|| Ok(vec![crate::catalog::test_support::sample_event()]));

        match load_action(&source).await {
            Action::EventsLoaded(events) => assert_eq!(events.len(), 1),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_action_failure() {
        let mut source = MockEventSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_load_events()
            .returning(|| Err(Error::catalog("upstream down")));

        match load_action(&source).await {
            Action::SetError(message) => assert!(message.contains("upstream down")),
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
