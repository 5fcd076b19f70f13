//! Builder for registering puzzle types.

use crate::builder::error::BuildError;
use crate::command::KeyCommandInterpreter;
use crate::config::SharedPolicy;
use crate::core::{Actor, DependencySet, KeyDependencies};
use crate::engine::{KeyTurnEngine, PuzzleIdentity};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// A registered two-key puzzle type.
///
/// Holds the immutable configuration shared by every instance. Instances
/// only add their own identity and turn history.
#[derive(Clone, Debug)]
pub struct PuzzleType {
    name: String,
    dependencies: Arc<KeyDependencies>,
}

impl PuzzleType {
    pub fn builder() -> PuzzleTypeBuilder {
        PuzzleTypeBuilder::new()
    }

    /// The stock advanced two-key module.
    pub fn turn_the_key_advanced() -> Self {
        Self {
            name: "Turn The Keys".to_string(),
            dependencies: Arc::new(KeyDependencies::turn_the_key_advanced()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &Arc<KeyDependencies> {
        &self.dependencies
    }

    /// Create the rule engine for one instance addressed as `!{code}`.
    pub fn instantiate(&self, code: impl Into<String>) -> KeyTurnEngine {
        let identity = PuzzleIdentity::new(code, self.name.clone());
        debug!(puzzle_type = %self.name, code = %identity.code, "instantiating puzzle");
        KeyTurnEngine::new(identity, Arc::clone(&self.dependencies))
    }

    /// Create an instance together with its command interpreter.
    pub fn interpreter(
        &self,
        code: impl Into<String>,
        policy: SharedPolicy,
    ) -> KeyCommandInterpreter {
        KeyCommandInterpreter::new(self.instantiate(code), policy)
    }
}

/// Builder for constructing puzzle types with a fluent API.
pub struct PuzzleTypeBuilder {
    name: Option<String>,
    left: DependencySet,
    right: DependencySet,
}

impl PuzzleTypeBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            left: DependencySet::default(),
            right: DependencySet::default(),
        }
    }

    /// Set the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set both dependency lists of one key.
    pub fn dependencies(mut self, actor: Actor, set: DependencySet) -> Self {
        match actor {
            Actor::Left => self.left = set,
            Actor::Right => self.right = set,
        }
        self
    }

    /// Start from the stock tables of the advanced module.
    pub fn stock_dependencies(mut self) -> Self {
        let stock = KeyDependencies::turn_the_key_advanced();
        self.left = stock.left;
        self.right = stock.right;
        self
    }

    /// Build the puzzle type.
    /// Returns an error if the name is missing or a dependency table is inconsistent.
    pub fn build(self) -> Result<PuzzleType, BuildError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(BuildError::MissingName)?;

        validate(Actor::Left, &self.left)?;
        validate(Actor::Right, &self.right)?;

        Ok(PuzzleType {
            name,
            dependencies: Arc::new(KeyDependencies::new(self.left, self.right)),
        })
    }
}

impl Default for PuzzleTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A key whose module is both forbidden and required could never turn legitimately.
fn validate(actor: Actor, set: &DependencySet) -> Result<(), BuildError> {
    for list in [&set.before, &set.after] {
        let mut seen = HashSet::new();
        for module in list {
            if module.trim().is_empty() {
                return Err(BuildError::EmptyIdentifier { actor });
            }
            if !seen.insert(module.as_str()) {
                return Err(BuildError::DuplicateIdentifier {
                    actor,
                    module: module.clone(),
                });
            }
        }
    }

    if let Some(module) = set.before.iter().find(|m| set.is_after(m)) {
        return Err(BuildError::ConflictingDependency {
            actor,
            module: module.clone(),
        });
    }
    Ok(())
}
