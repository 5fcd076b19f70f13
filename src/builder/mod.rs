//! Builder API for registering puzzle types.
//!
//! A puzzle type is built and validated once; its dependency tables are
//! then shared by every instance created from it.

pub mod error;
pub mod puzzle;

pub use error::BuildError;
pub use puzzle::{PuzzleType, PuzzleTypeBuilder};
