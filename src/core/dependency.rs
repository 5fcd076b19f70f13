//! Static per-key dependency tables.
//!
//! Tables are built once when a puzzle type is registered and shared by
//! reference with every instance of that type. Nothing here is mutated after
//! construction.

use super::actor::Actor;
use serde::{Deserialize, Serialize};

/// Ordering constraints attached to one key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    /// Modules that must *not* have been solved when this key turns.
    ///
    /// Published to the host before each turn so it can judge soft-lock
    /// violations itself.
    pub before: Vec<String>,

    /// Modules that must all be solved before this key may turn when strict
    /// ordering is enforced. Also sizes the reward.
    pub after: Vec<String>,
}

impl DependencySet {
    pub fn new<B, A>(before: B, after: A) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            before: before.into_iter().map(Into::into).collect(),
            after: after.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_before(&self, module: &str) -> bool {
        self.before.iter().any(|m| m == module)
    }

    pub fn is_after(&self, module: &str) -> bool {
        self.after.iter().any(|m| m == module)
    }
}

/// Dependency tables for both keys of a puzzle type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDependencies {
    pub left: DependencySet,
    pub right: DependencySet,
}

impl KeyDependencies {
    pub fn new(left: DependencySet, right: DependencySet) -> Self {
        Self { left, right }
    }

    /// The stock tables of the advanced two-key module.
    pub fn turn_the_key_advanced() -> Self {
        Self {
            left: DependencySet::new(
                [
                    "Maze",
                    "Memory",
                    "Complicated Wires",
                    "Wire Sequence",
                    "Cryptography",
                ],
                [
                    "Password",
                    "Crazy Talk",
                    "Who's on First",
                    "Keypad",
                    "Listening",
                    "Orientation Cube",
                ],
            ),
            right: DependencySet::new(
                [
                    "Semaphore",
                    "Combination Lock",
                    "Simon Says",
                    "Astrology",
                    "Switches",
                    "Plumbing",
                ],
                [
                    "Morse Code",
                    "Wires",
                    "Two Bits",
                    "The Button",
                    "Colour Flash",
                    "Round Keypad",
                ],
            ),
        }
    }

    pub fn for_actor(&self, actor: Actor) -> &DependencySet {
        match actor {
            Actor::Left => &self.left,
            Actor::Right => &self.right,
        }
    }

    /// True if `module` sits in either key's `after` list.
    pub fn in_any_after(&self, module: &str) -> bool {
        self.left.is_after(module) || self.right.is_after(module)
    }
}
