//! An in-memory host that records every effect it receives.
//!
//! Used by the test suites and the demo in place of a real bomb. Its turn
//! rule is deliberately simple: a key turns unless a module in the
//! published `before` list has already been solved.

use crate::core::Actor;
use crate::host::{BombInfo, Broadcaster, EffectSink, KeyHost, RewardPool, SoundCue};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    activated: bool,
    turned: HashMap<Actor, bool>,
    before_lists: HashMap<Actor, Vec<String>>,
    solved: Vec<String>,
    solvable: Vec<String>,
    refuse_turns: bool,

    turn_calls: usize,
    strikes: usize,
    passes: usize,
    reward: i64,
    wrong_turns: Vec<Actor>,
    unlocked: Vec<Actor>,
    sounds: Vec<SoundCue>,
    messages: Vec<String>,
}

impl RecordingHost {
    /// A host whose puzzle has not been armed yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activated() -> Self {
        Self {
            activated: true,
            ..Self::default()
        }
    }

    /// Add solved module instances. Each is also counted as solvable.
    pub fn with_solved<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for module in modules {
            let module = module.into();
            self.solvable.push(module.clone());
            self.solved.push(module);
        }
        self
    }

    /// Add module instances that are solvable but not yet solved.
    pub fn with_unsolved<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.solvable.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Make the host refuse every turn regardless of the bomb state.
    pub fn refusing_turns(mut self) -> Self {
        self.refuse_turns = true;
        self
    }

    pub fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }

    /// Mark one unsolved instance of `module` as solved.
    pub fn solve(&mut self, module: &str) {
        let solved = self.solved.iter().filter(|m| *m == module).count();
        let solvable = self.solvable.iter().filter(|m| *m == module).count();
        if solved < solvable {
            self.solved.push(module.to_string());
        }
    }

    pub fn turn_calls(&self) -> usize {
        self.turn_calls
    }

    pub fn strikes(&self) -> usize {
        self.strikes
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn reward(&self) -> i64 {
        self.reward
    }

    pub fn wrong_turns(&self) -> &[Actor] {
        &self.wrong_turns
    }

    pub fn unlocked(&self) -> &[Actor] {
        &self.unlocked
    }

    pub fn sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The `before` list last published for `actor`, if any.
    pub fn before_list(&self, actor: Actor) -> Option<&[String]> {
        self.before_lists.get(&actor).map(Vec::as_slice)
    }
}

impl KeyHost for RecordingHost {
    fn is_activated(&self) -> bool {
        self.activated
    }

    fn is_turned(&self, actor: Actor) -> bool {
        self.turned.get(&actor).copied().unwrap_or(false)
    }

    fn set_before_list(&mut self, actor: Actor, modules: &[String]) {
        self.before_lists.insert(actor, modules.to_vec());
    }

    fn invoke_turn(&mut self, actor: Actor) {
        self.turn_calls += 1;
        let forbidden_solved = self
            .before_list(actor)
            .unwrap_or_default()
            .iter()
            .any(|m| self.solved.contains(m));
        if !self.refuse_turns && !forbidden_solved {
            self.turned.insert(actor, true);
            self.unlocked.push(actor);
            self.sounds.push(SoundCue::TurnSuccess);
        }
    }

    fn force_turned(&mut self, actor: Actor) {
        self.turned.insert(actor, true);
    }
}

impl BombInfo for RecordingHost {
    fn solved_module_names(&self) -> Vec<String> {
        self.solved.clone()
    }

    fn solvable_module_names(&self) -> Vec<String> {
        self.solvable.clone()
    }
}

impl EffectSink for RecordingHost {
    fn trigger_wrong_turn(&mut self, actor: Actor) {
        self.wrong_turns.push(actor);
    }

    fn set_unlocked(&mut self, actor: Actor) {
        self.unlocked.push(actor);
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    fn handle_strike(&mut self) {
        self.strikes += 1;
    }

    fn handle_pass(&mut self) {
        self.passes += 1;
    }
}

impl RewardPool for RecordingHost {
    fn add_reward_bonus(&mut self, bonus: i64) {
        self.reward += bonus;
    }
}

impl Broadcaster for RecordingHost {
    fn send_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
