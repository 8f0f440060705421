//! Event catalog: the upstream data the slip reads from.
//!
//! Events are loaded once through an [`EventSource`] and then treated as
//! read-only. The helpers in this module extract what the slip and the UI
//! need from an event.

mod event;
mod helpers;
mod source;

pub use event::{
    Actor, BetGroup, BetGroups, Category, Choice, Competition, Event, Question, Sport,
};
pub use helpers::{bet_choices, bet_question, event_breadcrumb, format_date, has_event_label};
pub use source::{
    EmbeddedEventSource, EventSource, FileEventSource, load_action, parse_events,
    validate_events,
};

#[cfg(test)]
pub use source::MockEventSource;
