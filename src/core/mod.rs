//! Core puzzle types.
//!
//! This module contains the pure data of the two-key puzzle:
//! - Actors and the state derived from their `turned` flags
//! - Immutable dependency tables
//! - Guard predicates and turn outcomes
//! - Immutable turn history
//!
//! Nothing in this module performs side effects.

mod actor;
mod dependency;
mod guard;
mod history;
mod outcome;

pub use actor::{Actor, KeySnapshot, PuzzleState};
pub use dependency::{DependencySet, KeyDependencies};
pub use guard::Guard;
pub use history::{TurnHistory, TurnRecord};
pub use outcome::{StrikeCause, TurnOutcome};
