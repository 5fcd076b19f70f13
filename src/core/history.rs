//! Turn attempt history.
//!
//! Provides immutable tracking of every turn attempt that reached rule
//! evaluation, including the strikes it caused and any reward it granted.

use super::actor::Actor;
use super::outcome::{StrikeCause, TurnOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single evaluated turn attempt.
///
/// # Example
///
/// ```rust
/// use turnkey::core::{Actor, TurnHistory, TurnOutcome, TurnRecord};
/// use chrono::Utc;
///
/// let history = TurnHistory::new();
/// let history = history.record(TurnRecord {
///     actor: Actor::Left,
///     outcome: TurnOutcome::Success,
///     strikes: Vec::new(),
///     timestamp: Utc::now(),
/// });
/// assert_eq!(history.records().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The key the attempt targeted
    pub actor: Actor,
    /// What the engine concluded
    pub outcome: TurnOutcome,
    /// Strikes issued during the attempt, in order
    pub strikes: Vec<StrikeCause>,
    /// When the attempt finished
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of turn attempts.
///
/// `record` consumes the history and returns it with the attempt appended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnHistory {
    records: Vec<TurnRecord>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an attempt, returning the extended history.
    pub fn record(mut self, record: TurnRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn strike_count(&self) -> usize {
        self.records.iter().map(|r| r.strikes.len()).sum()
    }

    /// Number of strikes issued for `cause`.
    pub fn strikes_by_cause(&self, cause: StrikeCause) -> usize {
        self.records
            .iter()
            .flat_map(|r| r.strikes.iter())
            .filter(|c| **c == cause)
            .count()
    }

    /// Sum of every bonus granted. At most one attempt per puzzle grants one.
    pub fn reward_total(&self) -> i64 {
        self.records.iter().filter_map(|r| r.outcome.bonus()).sum()
    }

    pub fn reward_granted(&self) -> bool {
        self.records.iter().any(|r| r.outcome.bonus().is_some())
    }

    /// The attempts made on one key, oldest first.
    pub fn for_actor(&self, actor: Actor) -> impl Iterator<Item = &TurnRecord> {
        self.records.iter().filter(move |r| r.actor == actor)
    }
}
