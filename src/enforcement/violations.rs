//! Ordering violations.

use thiserror::Error;

/// A reason a key may not be turned yet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViolationError {
    #[error("Prerequisite '{module}' not fully solved ({solved} of {solvable})")]
    UnsolvedPrerequisite {
        module: String,
        solved: usize,
        solvable: usize,
    },
}
