//! Guard predicates for controlling key turns.
//!
//! Guards are pure boolean functions evaluated before any side effect. A
//! failing guard makes a turn attempt a silent no-op.

use super::actor::KeySnapshot;
use std::fmt;

/// Pure predicate over a value, typically a [`KeySnapshot`].
///
/// # Example
///
/// ```rust
/// use turnkey::core::{Actor, Guard, KeySnapshot};
///
/// let armed = Guard::armed();
/// let snapshot = KeySnapshot {
///     actor: Actor::Left,
///     activated: true,
///     turned: false,
/// };
///
/// assert!(armed.check(&snapshot));
/// assert!(!armed.check(&KeySnapshot { turned: true, ..snapshot }));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl Guard<KeySnapshot> {
    /// The puzzle is activated and the key has not been turned yet.
    pub fn armed() -> Self {
        Guard::new(|s: &KeySnapshot| s.activated && !s.turned)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Actor;

    fn snapshot(activated: bool, turned: bool) -> KeySnapshot {
        KeySnapshot {
            actor: Actor::Right,
            activated,
            turned,
        }
    }

    #[test]
    fn armed_requires_activation() {
        assert!(!Guard::armed().check(&snapshot(false, false)));
    }

    #[test]
    fn armed_rejects_turned_key() {
        assert!(!Guard::armed().check(&snapshot(true, true)));
        assert!(Guard::armed().check(&snapshot(true, false)));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::armed();
        let s = snapshot(true, false);
        assert_eq!(guard.check(&s), guard.check(&s));
    }

    #[test]
    fn guard_can_use_custom_predicates() {
        let guard = Guard::new(|n: &u32| n % 2 == 0);
        assert!(guard.check(&4));
        assert!(!guard.check(&3));
    }
}
