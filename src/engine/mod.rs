//! The key-turn rule engine and the forced-resolution sequence.
//!
//! The engine is the imperative shell around the pure `core` types: it
//! reads the host, evaluates ordering rules, hands the turn to the host and
//! emits strikes, rewards and messages through the host's effect sinks.

mod forced;
mod turn;

pub use forced::{ForcedResolution, ResolutionStep, UNLOCK_INTERVAL};
pub use turn::{KeyTurnEngine, PuzzleIdentity, REWARD_PER_MODULE};
