//! Context provided to enforcement checks.

use crate::config::Policy;
use crate::core::{Actor, DependencySet};
use crate::host::count_named;

/// Everything an ordering check may look at, captured once per attempt.
#[derive(Clone, Debug)]
pub struct TurnContext<'a> {
    pub actor: Actor,
    pub dependencies: &'a DependencySet,
    pub policy: Policy,
    pub solved: &'a [String],
    pub solvable: &'a [String],
}

impl TurnContext<'_> {
    /// Solved instances of `module`.
    pub fn solved_count(&self, module: &str) -> usize {
        count_named(self.solved, module)
    }

    /// Solvable instances of `module`.
    pub fn solvable_count(&self, module: &str) -> usize {
        count_named(self.solvable, module)
    }

    /// Every instance of `module` on the bomb is solved. Vacuously true when
    /// the module is absent.
    pub fn fully_solved(&self, module: &str) -> bool {
        self.solved_count(module) == self.solvable_count(module)
    }
}
