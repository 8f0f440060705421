//! Presentation helpers for events.
//!
//! All of these are pure. When an event carries several bet groups, the
//! first one in document order is the one that gets used.

use super::{Choice, Event};
use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format a start time as `"<day>th of <Month> <HH:MM>"`.
///
/// The suffix is always `th` ("1th", "2th", "21th"); the UI copy has always
/// read that way.
pub fn format_date<Tz>(start: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    start.format("%-dth of %B %H:%M").to_string()
}

/// Whether the event has a non-blank label.
pub fn has_event_label(event: &Event) -> bool {
    event
        .label
        .as_deref()
        .is_some_and(|label| !label.trim().is_empty())
}

/// Choices of the event's first bet group.
pub fn bet_choices(event: &Event) -> Result<&[Choice]> {
    event
        .bet
        .first()
        .and_then(|group| group.choices.as_deref())
        .ok_or_else(|| Error::missing_bet_data(&event.id))
}

/// Question label of the event's first bet group.
pub fn bet_question(event: &Event) -> Result<&str> {
    event
        .bet
        .first()
        .and_then(|group| group.question.as_ref())
        .map(|question| question.label.as_str())
        .ok_or_else(|| Error::missing_bet_question(&event.id))
}

/// `"<sport> / <category> / <competition>"`.
pub fn event_breadcrumb(event: &Event) -> String {
    format!(
        "{} / {} / {}",
        event.sport.label, event.category.label, event.competition.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{sample_event, start_at};
    use crate::catalog::{BetGroup, Choice};
    use chrono::{FixedOffset, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_date() {
        let start = start_at("2024-12-25T15:30:00Z");
        assert_eq!(format_date(&start), "25th of December 15:30");
    }

    #[test]
    fn test_format_date_keeps_th_suffix() {
        assert_eq!(format_date(&start_at("2024-03-01T09:05:00Z")), "1th of March 09:05");
        assert_eq!(format_date(&start_at("2024-03-02T00:00:00Z")), "2th of March 00:00");
        assert_eq!(format_date(&start_at("2024-03-21T23:59:00Z")), "21th of March 23:59");
    }

    #[test]
    fn test_format_date_in_offset() {
        let start = start_at("2024-12-31T23:30:00Z");
        let paris = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_date(&start.with_timezone(&paris)), "1th of January 00:30");
        assert_eq!(format_date(&start.with_timezone(&Utc)), "31th of December 23:30");
    }

    #[test]
    fn test_has_event_label() {
        let mut event = sample_event();
        assert!(has_event_label(&event));

        for blank in ["", "   ", "\t\n"] {
            event.label = Some(blank.to_string());
            assert!(!has_event_label(&event), "{blank:?} should not count");
        }

        event.label = None;
        assert!(!has_event_label(&event));

        event.label = Some("  Final  ".to_string());
        assert!(has_event_label(&event));
    }

    #[test]
    fn test_bet_choices() {
        let event = sample_event();
        let choices = bet_choices(&event).unwrap();
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].actor.label, "Team A");
    }

    #[test]
    fn test_bet_question() {
        let event = sample_event();
        assert_eq!(bet_question(&event).unwrap(), "Who will win?");
    }

    #[test]
    fn test_first_bet_group_wins() {
        let event = sample_event().with_bet_group(
            "bet2",
            BetGroup::new("Total goals?", vec![Choice::new("over", "Over", dec!(1.8))]),
        );
        assert_eq!(bet_question(&event).unwrap(), "Who will win?");
        assert_eq!(bet_choices(&event).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_bet_groups_fail() {
        let mut event = sample_event();
        event.bet = Default::default();

        assert!(matches!(
            bet_choices(&event),
            Err(Error::MissingBetData { event_id }) if event_id == "event-1"
        ));
        assert!(matches!(
            bet_question(&event),
            Err(Error::MissingBetQuestion { event_id }) if event_id == "event-1"
        ));
    }

    #[test]
    fn test_first_group_without_parts_fails() {
        let mut event = sample_event();
        event.bet = Default::default();
        event.bet.insert("broken", BetGroup::default());
        event.bet.insert(
            "valid",
            BetGroup::new("Winner?", vec![Choice::new("a", "A", dec!(2.0))]),
        );

        assert!(bet_choices(&event).is_err());
        assert!(bet_question(&event).is_err());
    }

    #[test]
    fn test_event_breadcrumb() {
        let event = sample_event();
        assert_eq!(
            event_breadcrumb(&event),
            "Football / Premier League / Final Match"
        );
    }
}
