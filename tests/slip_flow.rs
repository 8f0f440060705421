//! End-to-end slip flow through the public API.

use betslip::catalog::{self, EmbeddedEventSource, EventSource};
use betslip::state::{Action, BettingSlip, Store, View};
use betslip::Error;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tokio::sync::mpsc;

const EVENTS: &str = r#"[
  {
    "id": "derby",
    "label": "City Derby",
    "start": "2025-03-01T20:45:00Z",
    "sport": { "id": "s1", "label": "Football", "icon": "⚽" },
    "category": { "id": "c1", "label": "England" },
    "competition": { "id": "k1", "label": "Premier League" },
    "bet": {
      "result": {
        "id": "result",
        "question": { "id": "q1", "label": "Full time result" },
        "choices": [
          { "id": "home", "odd": 1.9, "actor": { "id": "a1", "label": "Home" } },
          { "id": "draw", "odd": 3.4, "actor": { "id": "a2", "label": "Draw" } },
          { "id": "away", "odd": 4.25, "actor": { "id": "a3", "label": "Away" } }
        ]
      }
    }
  },
  {
    "id": "no-bets",
    "label": "Exhibition",
    "start": "2025-03-02T18:00:00Z",
    "sport": { "label": "Basketball" },
    "category": { "label": "Friendly" },
    "competition": { "label": "Tour" },
    "bet": { "empty": { "question": { "label": "Winner?" } } }
  }
]"#;

#[test]
fn test_pick_stake_submit_and_history() {
    let events = catalog::parse_events(EVENTS).unwrap();
    let derby = &events[0];
    let mut slip = BettingSlip::default();

    for id in ["home", "away"] {
        let choice = derby.find_choice(id).unwrap();
        slip.toggle_bet(derby, choice).unwrap();
    }
    assert!(slip.update_bet_amount("2.50"));
    assert_eq!(slip.calculate_total(), "5.00");
    // 2.50 * (1.9 + 4.25) = 15.375
    assert_eq!(slip.calculate_potential_gain(), "15.38");

    let record = slip.submit_bets().unwrap();
    assert_eq!(record.bets[0].event_label, "City Derby");
    assert_eq!(record.bets[1].question, "Full time result");
    assert_eq!(record.total, "5.00");
    assert!(!slip.has_bets());
    assert_eq!(slip.bet_amount(), dec!(1.00));

    assert_eq!(slip.total_submissions(), 1);
    assert_eq!(slip.total_amount_wagered(), "5.00");
    assert_eq!(slip.submission_by_id(record.id), Some(&record));
    assert_eq!(
        slip.submission_by_timestamp(&record.timestamp_iso()),
        Some(&record)
    );
}

#[test]
fn test_event_without_choices_cannot_be_bet() {
    let events = catalog::parse_events(EVENTS).unwrap();
    let broken = &events[1];

    assert!(matches!(
        catalog::bet_choices(broken),
        Err(Error::MissingBetData { .. })
    ));
    assert_eq!(catalog::bet_question(broken).unwrap(), "Winner?");
    assert!(broken.find_choice("anything").is_none());
}

#[tokio::test]
async fn test_store_flow_with_bundled_catalog() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut store = Store::new(tx);

    let action = catalog::load_action(&EmbeddedEventSource).await;
    store.reduce(action);
    assert!(!store.catalog.events.is_empty());

    let event = store.catalog.events[0].clone();
    let choice = catalog::bet_choices(&event).unwrap()[0].clone();
    store.reduce(Action::ToggleBet {
        event_id: event.id.clone(),
        choice_id: choice.id.clone(),
    });
    assert_eq!(store.slip.bet_count(), 1);

    store.reduce(Action::SubmitBets);
    assert!(store.success.is_visible());
    assert_eq!(store.slip.total_submissions(), 1);

    store.reduce(Action::SetView(View::History));
    store.reduce(Action::ClearHistory);
    assert_eq!(store.slip.total_submissions(), 0);
    assert!(!EmbeddedEventSource.describe().is_empty());
}
