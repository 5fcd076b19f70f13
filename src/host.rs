//! Capabilities the host simulation provides to the engine.
//!
//! The engine never touches a concrete host type. A host adapter implements
//! these traits and is passed to every operation as the environment; tests
//! pass a recording double instead.

use crate::core::{Actor, KeySnapshot, PuzzleState};

/// Audio cues the puzzle plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A key turned successfully.
    TurnSuccess,
    /// A key turn was refused.
    WrongTurn,
}

impl SoundCue {
    /// Asset name of the cue.
    pub fn asset(self) -> &'static str {
        match self {
            Self::TurnSuccess => "TurnTheKeyFX",
            Self::WrongTurn => "WrongKeyTurnFK",
        }
    }
}

/// The host's two-key module.
pub trait KeyHost {
    /// Whether the host has armed the puzzle.
    fn is_activated(&self) -> bool;

    fn is_turned(&self, actor: Actor) -> bool;

    /// Publish the modules that must not be solved before `actor` turns.
    fn set_before_list(&mut self, actor: Actor, modules: &[String]);

    /// Run the host's own turn handler for `actor`.
    ///
    /// The host alone decides whether the turn is physically valid, and sets
    /// the `turned` flag if it is.
    fn invoke_turn(&mut self, actor: Actor);

    /// Mark `actor` as turned without any checks. Only forced resolution uses this.
    fn force_turned(&mut self, actor: Actor);
}

/// Read-only view of the rest of the bomb.
pub trait BombInfo {
    /// Names of solved modules, one entry per solved instance.
    fn solved_module_names(&self) -> Vec<String>;

    /// Names of solvable modules, one entry per instance.
    fn solvable_module_names(&self) -> Vec<String>;
}

/// Visual, audio and scoring effects the engine emits.
pub trait EffectSink {
    /// Play the wrong-turn animation on `actor`'s key.
    fn trigger_wrong_turn(&mut self, actor: Actor);

    /// Show `actor`'s key as unlocked.
    fn set_unlocked(&mut self, actor: Actor);

    fn play_sound(&mut self, cue: SoundCue);

    fn handle_strike(&mut self);

    /// Report the puzzle as solved.
    fn handle_pass(&mut self);
}

/// Shared reward counter. Written by the engine, never read by it.
pub trait RewardPool {
    fn add_reward_bonus(&mut self, bonus: i64);
}

/// One-line chat broadcast.
pub trait Broadcaster {
    fn send_message(&mut self, message: &str);
}

/// Everything a puzzle instance needs from its host.
pub trait PuzzleEnv: KeyHost + BombInfo + EffectSink + RewardPool + Broadcaster {}

impl<T> PuzzleEnv for T where T: KeyHost + BombInfo + EffectSink + RewardPool + Broadcaster {}

/// Read the state of `actor` from the host.
pub fn snapshot<H: KeyHost + ?Sized>(host: &H, actor: Actor) -> KeySnapshot {
    KeySnapshot {
        actor,
        activated: host.is_activated(),
        turned: host.is_turned(actor),
    }
}

pub fn puzzle_state<H: KeyHost + ?Sized>(host: &H) -> PuzzleState {
    PuzzleState::from_flags(host.is_turned(Actor::Left), host.is_turned(Actor::Right))
}

/// How many instances named `module` occur in `names`.
pub(crate) fn count_named(names: &[String], module: &str) -> usize {
    names.iter().filter(|n| *n == module).count()
}
