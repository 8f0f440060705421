//! Upstream event data as served by the event catalog.
//!
//! These types are read-only inputs: the slip copies what it needs out of
//! them and never mutates them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A sport (e.g. "Football").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

/// A category within a sport (e.g. "Premier League").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub label: String,
}

/// A competition within a category (e.g. "Final Match").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub id: String,
    pub label: String,
}

/// The participant a choice backs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub id: String,
    pub label: String,
}

/// One selectable outcome within a bet group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    /// Decimal odd, strictly positive.
    pub odd: Decimal,
    pub actor: Actor,
}

impl Choice {
    /// Create a new choice.
    pub fn new(id: impl Into<String>, actor_label: impl Into<String>, odd: Decimal) -> Self {
        Self {
            id: id.into(),
            odd,
            actor: Actor {
                id: String::new(),
                label: actor_label.into(),
            },
        }
    }
}

/// The question a bet group asks (e.g. "Who will win?").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: String,
    pub label: String,
}

/// A question plus its choices.
///
/// Both parts are optional on the wire; the helpers report their absence as
/// data contract errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BetGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub question: Option<Question>,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

impl BetGroup {
    /// Create a bet group with a question and choices.
    pub fn new(question: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            question: Some(Question {
                id: String::new(),
                label: question.into(),
            }),
            choices: Some(choices),
        }
    }
}

/// Bet groups keyed by their internal identifier, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetGroups(Vec<(String, BetGroup)>);

impl BetGroups {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group. Re-inserting an existing id replaces the group but keeps
    /// its original position.
    pub fn insert(&mut self, id: impl Into<String>, group: BetGroup) -> Option<BetGroup> {
        let id = id.into();
        match self.0.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, group)),
            None => {
                self.0.push((id, group));
                None
            }
        }
    }

    /// The first group in iteration order.
    pub fn first(&self) -> Option<&BetGroup> {
        self.0.first().map(|(_, group)| group)
    }

    /// Iterate over `(id, group)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BetGroup)> {
        self.0.iter().map(|(key, group)| (key.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for BetGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, group) in &self.0 {
            map.serialize_entry(id, group)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BetGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BetGroupsVisitor;

        impl<'de> Visitor<'de> for BetGroupsVisitor {
            type Value = BetGroups;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of bet group id to bet group")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BetGroups, A::Error> {
                let mut groups = BetGroups::new();
                while let Some((id, group)) = access.next_entry::<String, BetGroup>()? {
                    groups.insert(id, group);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(BetGroupsVisitor)
    }
}

/// A sporting event with its betting offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Display label; may be absent or blank.
    #[serde(default)]
    pub label: Option<String>,
    /// Kick-off time.
    pub start: DateTime<Utc>,
    pub sport: Sport,
    pub category: Category,
    pub competition: Competition,
    /// Betting offers keyed by bet group id.
    #[serde(default)]
    pub bet: BetGroups,
}

impl Event {
    /// Create an event with no bet groups.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        start: DateTime<Utc>,
        sport: impl Into<String>,
        category: impl Into<String>,
        competition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            start,
            sport: Sport {
                label: sport.into(),
                ..Default::default()
            },
            category: Category {
                label: category.into(),
                ..Default::default()
            },
            competition: Competition {
                label: competition.into(),
                ..Default::default()
            },
            bet: BetGroups::new(),
        }
    }

    /// Add a bet group, builder style.
    pub fn with_bet_group(mut self, id: impl Into<String>, group: BetGroup) -> Self {
        self.bet.insert(id, group);
        self
    }

    /// The label, or an empty string when absent.
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Find a choice by id across all bet groups.
    pub fn find_choice(&self, choice_id: &str) -> Option<&Choice> {
        self.bet
            .iter()
            .filter_map(|(_, group)| group.choices.as_ref())
            .flatten()
            .find(|choice| choice.id == choice_id)
    }
}
