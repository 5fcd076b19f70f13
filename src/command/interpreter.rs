//! Command interpreter for the two-key puzzle.

use super::parser::{parse, KeyCommand};
use super::{CommandHandler, Response};
use crate::config::SharedPolicy;
use crate::engine::KeyTurnEngine;
use crate::host::PuzzleEnv;
use tracing::debug;

/// Sent before every dispatched turn.
pub const ACKNOWLEDGEMENT: &str = "Turning the key";

/// Turns `turn left` / `turn right` commands into engine turn attempts.
#[derive(Debug)]
pub struct KeyCommandInterpreter {
    engine: KeyTurnEngine,
    policy: SharedPolicy,
}

impl KeyCommandInterpreter {
    pub fn new(engine: KeyTurnEngine, policy: SharedPolicy) -> Self {
        Self { engine, policy }
    }

    pub fn engine(&self) -> &KeyTurnEngine {
        &self.engine
    }

    /// Usage line shown to players, addressed with the puzzle's code.
    pub fn help_text(&self) -> String {
        let code = &self.engine.identity().code;
        format!("Turn the left key with !{code} turn left. Turn the right key with !{code} turn right.")
    }
}

impl<E: PuzzleEnv + ?Sized> CommandHandler<E> for KeyCommandInterpreter {
    /// The acknowledgement is emitted before the turn is evaluated; both are
    /// produced within this call, so a caller holding the acknowledgement
    /// knows the attempt has been dispatched.
    fn respond(&mut self, command: &str, env: &mut E) -> Vec<Response> {
        let actor = match parse(command) {
            KeyCommand::Turn(actor) => actor,
            KeyCommand::NoAction => {
                debug!(puzzle = %self.engine.identity().code, command, "command not understood");
                return Vec::new();
            }
        };

        let mut responses = vec![Response::Message(ACKNOWLEDGEMENT.to_string())];
        let outcome = self.engine.attempt_turn(actor, self.policy.snapshot(), env);
        responses.push(Response::Turn { actor, outcome });
        responses
    }
}
