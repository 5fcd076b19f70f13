//! The key-turn rule engine.

use crate::config::Policy;
use crate::core::{
    Actor, Guard, KeyDependencies, KeySnapshot, PuzzleState, StrikeCause, TurnHistory,
    TurnOutcome, TurnRecord,
};
use crate::enforcement::{check_ordering, TurnContext};
use crate::host::{self, PuzzleEnv, SoundCue};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

use super::forced::ForcedResolution;

/// Points granted per solved `after` module once both keys are turned.
pub const REWARD_PER_MODULE: i64 = 2;

/// How a puzzle instance is addressed in chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleIdentity {
    /// Short code players type after `!`.
    pub code: String,
    pub display_name: String,
}

impl PuzzleIdentity {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// Rule engine for one two-key puzzle instance.
///
/// Dependency tables are shared with every other instance of the same
/// puzzle type. The turn history is owned by this instance.
#[derive(Debug)]
pub struct KeyTurnEngine {
    identity: PuzzleIdentity,
    dependencies: Arc<KeyDependencies>,
    arming: Guard<KeySnapshot>,
    history: TurnHistory,
}

impl KeyTurnEngine {
    pub fn new(identity: PuzzleIdentity, dependencies: Arc<KeyDependencies>) -> Self {
        Self {
            identity,
            dependencies,
            arming: Guard::armed(),
            history: TurnHistory::new(),
        }
    }

    pub fn identity(&self) -> &PuzzleIdentity {
        &self.identity
    }

    pub fn dependencies(&self) -> &KeyDependencies {
        &self.dependencies
    }

    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    pub fn puzzle_state<E: PuzzleEnv + ?Sized>(&self, env: &E) -> PuzzleState {
        host::puzzle_state(env)
    }

    /// Attempt to turn `actor`'s key.
    ///
    /// Runs to completion in one call: ordering checks, delegation to the
    /// host, soft-lock penalties and the reward all happen before returning.
    /// Attempts on an unarmed puzzle or an already turned key are ignored
    /// and leave no trace.
    pub fn attempt_turn<E>(&mut self, actor: Actor, policy: Policy, env: &mut E) -> TurnOutcome
    where
        E: PuzzleEnv + ?Sized,
    {
        let snapshot = host::snapshot(&*env, actor);
        if !self.arming.check(&snapshot) {
            debug!(
                puzzle = %self.identity.code,
                %actor,
                activated = snapshot.activated,
                turned = snapshot.turned,
                "turn ignored"
            );
            return TurnOutcome::Rejected;
        }

        let dependencies = Arc::clone(&self.dependencies);
        let deps = dependencies.for_actor(actor);
        let mut strikes = Vec::new();

        let solved = env.solved_module_names();
        let solvable = env.solvable_module_names();
        let context = TurnContext {
            actor,
            dependencies: deps,
            policy,
            solved: &solved,
            solvable: &solvable,
        };

        if let Validation::Failure(violations) = check_ordering(&context) {
            for violation in violations.iter() {
                warn!(puzzle = %self.identity.code, %actor, %violation, "ordering violation");
            }
            Self::wrong_turn(env, actor, StrikeCause::OrderingViolation, &mut strikes);
            let outcome = TurnOutcome::WrongTurn(StrikeCause::OrderingViolation);
            return self.finish(actor, outcome, strikes);
        }

        let published: &[String] = if policy.disable_soft_lock {
            &[]
        } else {
            &deps.before
        };
        env.set_before_list(actor, published);
        env.invoke_turn(actor);

        if !env.is_turned(actor) {
            Self::wrong_turn(env, actor, StrikeCause::HostRejected, &mut strikes);
            let outcome = TurnOutcome::WrongTurn(StrikeCause::HostRejected);
            return self.finish(actor, outcome, strikes);
        }

        let solved = env.solved_module_names();
        if policy.disable_soft_lock {
            if let Some(module) = solved.iter().find(|m| deps.is_before(m)) {
                warn!(puzzle = %self.identity.code, %actor, %module, "soft-lock bypassed");
                env.handle_strike();
                strikes.push(StrikeCause::SoftLockBypass);
            }
        }

        if !env.is_turned(actor.other()) {
            info!(puzzle = %self.identity.code, %actor, "key turned, waiting on the other key");
            return self.finish(actor, TurnOutcome::Success, strikes);
        }

        let modules = solved
            .iter()
            .filter(|m| dependencies.in_any_after(m))
            .count();
        let bonus = REWARD_PER_MODULE * modules as i64;
        env.add_reward_bonus(bonus);
        env.send_message(&format!(
            "Reward increased by {} for defusing module !{} ({}).",
            bonus, self.identity.code, self.identity.display_name
        ));
        info!(puzzle = %self.identity.code, %actor, bonus, modules, "both keys turned");
        self.finish(actor, TurnOutcome::SuccessWithReward { bonus }, strikes)
    }

    /// Unlock both keys and pass the puzzle without evaluating any rule.
    ///
    /// Records nothing in the history and grants no reward.
    pub async fn force_solve<E, D, Fut>(&self, env: &mut E, delay: D)
    where
        E: PuzzleEnv + ?Sized,
        D: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        info!(puzzle = %self.identity.code, "force solving");
        ForcedResolution::run(env, delay).await;
    }

    fn wrong_turn<E>(
        env: &mut E,
        actor: Actor,
        cause: StrikeCause,
        strikes: &mut Vec<StrikeCause>,
    ) where
        E: PuzzleEnv + ?Sized,
    {
        env.trigger_wrong_turn(actor);
        env.play_sound(SoundCue::WrongTurn);
        env.handle_strike();
        strikes.push(cause);
    }

    fn finish(
        &mut self,
        actor: Actor,
        outcome: TurnOutcome,
        strikes: Vec<StrikeCause>,
    ) -> TurnOutcome {
        if !strikes.is_empty() {
            info!(
                puzzle = %self.identity.code,
                %actor,
                ?outcome,
                ?strikes,
                "strike issued"
            );
        }
        self.history = std::mem::take(&mut self.history).record(TurnRecord {
            actor,
            outcome,
            strikes,
            timestamp: Utc::now(),
        });
        outcome
    }
}
