//! Process-wide policy flags.
//!
//! The policy is owned outside this crate. Owners load it (usually from TOML)
//! and publish changes through a [`SharedPolicy`]; the engine and command
//! layers only take snapshots.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse policy: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Policy flags consulted on every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Every module in a key's `after` list must be fully solved before the
    /// key may turn.
    pub enforce_solve_all_before_turning: bool,

    /// Hide the `before` lists from the host so keys can always turn. Turning
    /// past an already-solved forbidden module is still penalized.
    pub disable_soft_lock: bool,

    /// Let troll commands through to the module instead of intercepting them.
    pub enable_troll_commands: bool,
}

impl Policy {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load the policy from a TOML file.
///
/// A missing file yields `Policy::default()`.
pub fn load_policy(path: &Path) -> Result<Policy, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "policy file missing, using defaults");
        return Ok(Policy::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let policy = Policy::from_toml_str(&contents)?;
    debug!(path = %path.display(), ?policy, "policy loaded");
    Ok(policy)
}

/// Shared, externally owned handle to the live policy.
///
/// Clones point at the same flags, so a toggle flipped by the owner is seen
/// by the next command.
#[derive(Clone, Debug, Default)]
pub struct SharedPolicy {
    inner: Arc<RwLock<Policy>>,
}

impl SharedPolicy {
    pub fn new(policy: Policy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(policy)),
        }
    }

    /// Copy of the flags as they are right now.
    pub fn snapshot(&self) -> Policy {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the flags. Only the policy owner should call this.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Policy),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

impl From<Policy> for SharedPolicy {
    fn from(policy: Policy) -> Self {
        Self::new(policy)
    }
}
