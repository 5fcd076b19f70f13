//! The two keys of the puzzle and the state derived from them.
//!
//! An actor's `turned` flag lives in the host simulation. The core only ever
//! reads it, through the snapshots defined here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independently operable keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Left,
    Right,
}

impl Actor {
    /// Both actors, left first.
    pub const ALL: [Actor; 2] = [Actor::Left, Actor::Right];

    /// The key on the opposite side of the puzzle.
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Display name used in logs and acknowledgements.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point-in-time view of one key, read from the host before a turn attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySnapshot {
    pub actor: Actor,
    /// Whether the puzzle has been armed by the host.
    pub activated: bool,
    pub turned: bool,
}

/// Aggregate state of both keys.
///
/// Derived purely from the two `turned` flags; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleState {
    /// Neither key has been turned.
    Locked,
    /// Exactly one key is turned; the reward is still withheld.
    PartiallyUnlocked(Actor),
    /// Both keys are turned.
    Unlocked,
}

impl PuzzleState {
    pub fn from_flags(left_turned: bool, right_turned: bool) -> Self {
        match (left_turned, right_turned) {
            (false, false) => Self::Locked,
            (true, false) => Self::PartiallyUnlocked(Actor::Left),
            (false, true) => Self::PartiallyUnlocked(Actor::Right),
            (true, true) => Self::Unlocked,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Locked => "Locked",
            Self::PartiallyUnlocked(_) => "PartiallyUnlocked",
            Self::Unlocked => "Unlocked",
        }
    }

    /// Both keys turned; no further turn can change anything.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}
