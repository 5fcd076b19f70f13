//! Validation-based ordering enforcement for key turns.
//!
//! Checks run before a turn is delegated to the host. They use Stillwater's
//! `Validation` type so that every unsolved prerequisite is reported in one
//! pass, not just the first one found. Any violation refuses the turn.
//!
//! # Example
//!
//! ```rust
//! use turnkey::config::Policy;
//! use turnkey::core::{Actor, DependencySet};
//! use turnkey::enforcement::{check_ordering, TurnContext};
//!
//! let deps = DependencySet::new(Vec::<String>::new(), ["Wires"]);
//! let solvable = vec!["Wires".to_string()];
//! let context = TurnContext {
//!     actor: Actor::Right,
//!     dependencies: &deps,
//!     policy: Policy { enforce_solve_all_before_turning: true, ..Policy::default() },
//!     solved: &[],
//!     solvable: &solvable,
//! };
//!
//! assert!(check_ordering(&context).is_failure());
//! ```

pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use context::TurnContext;
pub use rules::{check_ordering, OrderingResult};
pub use violations::ViolationError;
