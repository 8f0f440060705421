//! Betting slip state: selected bets, the shared stake and submissions.

use crate::catalog::{self, Choice, Event};
use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Stake used when the slip is created and after every submission.
pub const DEFAULT_STAKE: Decimal = dec!(1.00);
/// Lowest stake the slip accepts.
pub const MIN_STAKE: Decimal = dec!(0.10);
/// Increment used by the +/- stake controls.
pub const STAKE_STEP: Decimal = dec!(0.10);

/// Compose the identity key of a bet.
pub fn bet_key(event_id: &str, choice_id: &str) -> String {
    format!("{}-{}", event_id, choice_id)
}

/// Round to cents, halves away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Total and potential gain for `stake` over `bets` plus an optional extra
/// odd, or `None` when either does not fit in a `Decimal`.
fn checked_totals(
    stake: Decimal,
    bets: &[SelectedBet],
    extra_odd: Option<Decimal>,
) -> Option<(Decimal, Decimal)> {
    let count = Decimal::from(bets.len() + usize::from(extra_odd.is_some()));
    let odds = bets
        .iter()
        .map(|bet| bet.odd)
        .chain(extra_odd)
        .try_fold(Decimal::ZERO, Decimal::checked_add)?;
    Some((stake.checked_mul(count)?, stake.checked_mul(odds)?))
}

/// Render an amount with exactly two decimals.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// One outcome the user picked on one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBet {
    /// `"<event_id>-<choice_id>"`, unique within the slip.
    pub key: String,
    pub event_label: String,
    pub choice_label: String,
    pub odd: Decimal,
    pub question: String,
    pub event_id: String,
    pub choice_id: String,
}

/// Snapshot of the slip taken when it was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub bets: Vec<SelectedBet>,
    /// Stake per bet at submission time.
    pub amount: Decimal,
    pub total: String,
    pub potential_gain: String,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Timestamp as ISO-8601 with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Amount wagered by this submission.
    pub fn wagered(&self) -> Decimal {
        self.amount.saturating_mul(Decimal::from(self.bets.len()))
    }
}

/// Raw stake input as it arrives from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum StakeInput {
    Number(f64),
    Decimal(Decimal),
    Text(String),
}

impl StakeInput {
    /// Parse to a decimal. `None` when the input is not a number.
    pub fn parse(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) if value.is_finite() => Decimal::from_f64(*value),
            Self::Number(_) => None,
            Self::Decimal(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .ok()
            }
        }
    }
}

impl From<f64> for StakeInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for StakeInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for StakeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StakeInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Limits applied to the stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeRules {
    pub default_stake: Decimal,
    pub min_stake: Decimal,
    pub step: Decimal,
}

impl Default for StakeRules {
    fn default() -> Self {
        Self {
            default_stake: DEFAULT_STAKE,
            min_stake: MIN_STAKE,
            step: STAKE_STEP,
        }
    }
}

/// The betting slip.
#[derive(Debug)]
pub struct BettingSlip {
    selected_bets: Vec<SelectedBet>,
    bet_amount: Decimal,
    submission_history: Vec<SubmissionRecord>,
    rules: StakeRules,
    /// Highlighted bet in the slip panel.
    pub selected_index: Option<usize>,
    /// Highlighted submission in the history view.
    pub history_index: Option<usize>,
}

impl Default for BettingSlip {
    fn default() -> Self {
        Self::new(StakeRules::default())
    }
}

impl BettingSlip {
    /// Create an empty slip with the given stake rules.
    pub fn new(rules: StakeRules) -> Self {
        Self {
            selected_bets: Vec::new(),
            bet_amount: round_cents(rules.default_stake),
            submission_history: Vec::new(),
            rules,
            selected_index: None,
            history_index: None,
        }
    }

    /// Selected bets in insertion order.
    pub fn selected_bets(&self) -> &[SelectedBet] {
        &self.selected_bets
    }

    /// Current stake per bet.
    pub fn bet_amount(&self) -> Decimal {
        self.bet_amount
    }

    pub fn rules(&self) -> StakeRules {
        self.rules
    }

    pub fn bet_count(&self) -> usize {
        self.selected_bets.len()
    }

    pub fn has_bets(&self) -> bool {
        !self.selected_bets.is_empty()
    }

    /// The bet highlighted in the slip panel.
    pub fn selected_bet(&self) -> Option<&SelectedBet> {
        self.selected_index.and_then(|i| self.selected_bets.get(i))
    }

    /// Add the bet if absent, remove it if present.
    ///
    /// Adding reads the question of the event's first bet group; if the event
    /// has none the slip is left untouched and the error is returned.
    pub fn toggle_bet(&mut self, event: &Event, choice: &Choice) -> Result<()> {
        let key = bet_key(&event.id, &choice.id);
        if let Some(index) = self.position(&key) {
            self.remove_at(index);
            return Ok(());
        }

        let question = catalog::bet_question(event)?;
        if checked_totals(self.bet_amount, &self.selected_bets, Some(choice.odd)).is_none() {
            return Err(Error::invalid_input("Stake too large to add another bet"));
        }
        self.selected_bets.push(SelectedBet {
            key,
            event_label: event.label_or_default().to_string(),
            choice_label: choice.actor.label.clone(),
            odd: choice.odd,
            question: question.to_string(),
            event_id: event.id.clone(),
            choice_id: choice.id.clone(),
        });
        Ok(())
    }

    /// Add every pair that is not selected yet. Pairs already on the slip are
    /// left alone. Returns how many bets were added.
    pub fn add_multiple_bets<'a, I>(&mut self, pairs: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'a Event, &'a Choice)>,
    {
        let mut added = 0;
        for (event, choice) in pairs {
            if !self.is_selected(&event.id, &choice.id) {
                self.toggle_bet(event, choice)?;
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove the bet with this key. Returns whether anything was removed.
    pub fn remove_bet(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, event_id: &str, choice_id: &str) -> bool {
        self.position(&bet_key(event_id, choice_id)).is_some()
    }

    /// Raise the stake by one step. Kept as is when the totals would overflow.
    pub fn increase_bet_amount(&mut self) {
        if let Some(next) = self.bet_amount.checked_add(self.rules.step) {
            self.set_bet_amount(next);
        }
    }

    /// Lower the stake by one step, never below the minimum.
    pub fn decrease_bet_amount(&mut self) {
        self.bet_amount = round_cents(self.bet_amount - self.rules.step).max(self.rules.min_stake);
    }

    /// Set the stake from raw input.
    ///
    /// Input that does not parse, or that `set_bet_amount` refuses, is ignored
    /// and the previous stake is kept. Returns whether the stake was updated.
    pub fn update_bet_amount(&mut self, raw: impl Into<StakeInput>) -> bool {
        match raw.into().parse() {
            Some(value) => self.set_bet_amount(value),
            None => false,
        }
    }

    /// Set the stake, ignoring values below the minimum or too large to total.
    pub fn set_bet_amount(&mut self, value: Decimal) -> bool {
        if value < self.rules.min_stake {
            return false;
        }
        let value = round_cents(value);
        if checked_totals(value, &self.selected_bets, None).is_none() {
            return false;
        }
        self.bet_amount = value;
        true
    }

    pub fn reset_bet_amount(&mut self) {
        self.bet_amount = round_cents(self.rules.default_stake);
    }

    /// Stake times number of bets.
    pub fn total(&self) -> Decimal {
        checked_totals(self.bet_amount, &self.selected_bets, None)
            .map_or(Decimal::MAX, |(total, _)| total)
    }

    /// Stake times the sum of all odds. Odds are added, not multiplied.
    pub fn potential_gain(&self) -> Decimal {
        checked_totals(self.bet_amount, &self.selected_bets, None)
            .map_or(Decimal::MAX, |(_, gain)| gain)
    }

    /// Total formatted with two decimals.
    pub fn calculate_total(&self) -> String {
        format_amount(self.total())
    }

    /// Potential gain formatted with two decimals.
    pub fn calculate_potential_gain(&self) -> String {
        format_amount(self.potential_gain())
    }

    /// Submit the slip.
    ///
    /// Fails without touching anything when the slip is empty. Otherwise the
    /// record is appended to the history, the slip is emptied and the stake
    /// goes back to its default.
    pub fn submit_bets(&mut self) -> Result<SubmissionRecord> {
        if self.selected_bets.is_empty() {
            return Err(Error::EmptySelection);
        }

        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            bets: self.selected_bets.clone(),
            amount: self.bet_amount,
            total: self.calculate_total(),
            potential_gain: self.calculate_potential_gain(),
            timestamp: Utc::now(),
        };

        self.submission_history.push(record.clone());
        self.clear_all_bets();
        self.reset_bet_amount();

        Ok(record)
    }

    /// Empty the slip. The stake is kept.
    pub fn clear_all_bets(&mut self) {
        self.selected_bets.clear();
        self.selected_index = None;
    }

    pub fn submission_history(&self) -> &[SubmissionRecord] {
        &self.submission_history
    }

    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.submission_history.last()
    }

    pub fn total_submissions(&self) -> usize {
        self.submission_history.len()
    }

    /// Sum of all submitted totals, two decimals.
    pub fn total_amount_wagered(&self) -> String {
        let total = self
            .submission_history
            .iter()
            .map(SubmissionRecord::wagered)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        format_amount(total)
    }

    /// Find a submission by its ISO-8601 timestamp.
    pub fn submission_by_timestamp(&self, timestamp: &str) -> Option<&SubmissionRecord> {
        self.submission_history
            .iter()
            .find(|record| record.timestamp_iso() == timestamp)
    }

    pub fn submission_by_id(&self, id: Uuid) -> Option<&SubmissionRecord> {
        self.submission_history.iter().find(|record| record.id == id)
    }

    pub fn clear_submission_history(&mut self) {
        self.submission_history.clear();
        self.history_index = None;
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.selected_bets.iter().position(|bet| bet.key == key)
    }

    fn remove_at(&mut self, index: usize) {
        self.selected_bets.remove(index);
        self.selected_index = match self.selected_bets.len() {
            0 => None,
            len => self.selected_index.map(|i| i.min(len - 1)),
        };
    }
}
