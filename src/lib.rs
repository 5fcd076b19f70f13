//! Turnkey: a rule engine for synchronized two-key puzzles
//!
//! Two keys, left and right, are turned by free-text chat commands. Before a
//! turn reaches the host simulation the engine checks cross-puzzle ordering
//! rules; afterwards it applies strikes for violations and grants a shared
//! reward once both keys are turned.
//!
//! # Core Concepts
//!
//! - **Core**: actors, dependency tables, outcomes and turn history (pure data)
//! - **Enforcement**: ordering checks that accumulate every violation
//! - **Engine**: the key-turn rules and the forced-resolution sequence
//! - **Command**: the `turn left|right` interpreter and troll-command middleware
//! - **Host**: capability traits the host simulation implements
//!
//! # Example
//!
//! ```rust
//! use turnkey::builder::PuzzleType;
//! use turnkey::command::{CommandHandler, Response, TrollCommandTable, TrollFilter};
//! use turnkey::config::{Policy, SharedPolicy};
//! use turnkey::sim::RecordingHost;
//!
//! let policy = SharedPolicy::new(Policy::default());
//! let interpreter = PuzzleType::turn_the_key_advanced().interpreter("3", policy.clone());
//! let mut handler = TrollFilter::new(
//!     interpreter,
//!     TrollCommandTable::from_pairs([("turn both", "One at a time.")]),
//!     policy,
//! );
//!
//! let mut host = RecordingHost::activated().with_solved(["Password"]);
//! handler.respond("turn left", &mut host);
//! let responses = handler.respond("turn right", &mut host);
//!
//! assert_eq!(responses[0], Response::Message("Turning the key".into()));
//! assert_eq!(host.reward(), 2);
//!
//! let blocked = handler.respond("Turn Both", &mut host);
//! assert_eq!(blocked, vec![Response::ChatError("One at a time.".into())]);
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod engine;
pub mod host;
pub mod sim;

// Re-export commonly used types
pub use crate::builder::{BuildError, PuzzleType};
pub use crate::command::{CommandHandler, KeyCommandInterpreter, Response, TrollFilter};
pub use crate::config::{Policy, SharedPolicy};
pub use crate::core::{Actor, KeyDependencies, StrikeCause, TurnOutcome};
pub use crate::engine::{ForcedResolution, KeyTurnEngine, PuzzleIdentity};
pub use crate::host::PuzzleEnv;
