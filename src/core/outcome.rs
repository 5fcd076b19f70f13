//! Terminal results of a turn attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a strike was issued.
///
/// Every strike the engine issues carries one of these, so observers can
/// tell ordering penalties apart from soft-lock bypass penalties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeCause {
    /// A module in the key's `after` list was not fully solved.
    OrderingViolation,
    /// The host judged the physical turn invalid.
    HostRejected,
    /// The turn succeeded only because soft-lock protection was disabled,
    /// and a forbidden module had already been solved.
    SoftLockBypass,
}

impl fmt::Display for StrikeCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OrderingViolation => "ordering violation",
            Self::HostRejected => "host rejected turn",
            Self::SoftLockBypass => "soft-lock bypass",
        };
        f.write_str(s)
    }
}

/// Result of a single turn attempt.
///
/// Advisory only: the emitted effects are the source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Puzzle not armed, or the key was already turned. Nothing happened.
    Rejected,
    /// The turn failed and was penalized.
    WrongTurn(StrikeCause),
    /// The key turned; the other key is still locked.
    Success,
    /// The key turned and completed the puzzle.
    SuccessWithReward { bonus: i64 },
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success | Self::SuccessWithReward { .. })
    }

    pub fn bonus(&self) -> Option<i64> {
        match self {
            Self::SuccessWithReward { bonus } => Some(*bonus),
            _ => None,
        }
    }
}
