//! Build errors for puzzle type registration.

use crate::core::Actor;
use thiserror::Error;

/// Errors that can occur when building a puzzle type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Puzzle type name not specified. Call .name(..) before .build()")]
    MissingName,

    #[error("Empty module identifier in the {actor} key's dependencies")]
    EmptyIdentifier { actor: Actor },

    #[error("Module '{module}' listed twice for the {actor} key")]
    DuplicateIdentifier { actor: Actor, module: String },

    #[error("Module '{module}' is both a before and an after dependency of the {actor} key")]
    ConflictingDependency { actor: Actor, module: String },
}
