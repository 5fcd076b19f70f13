//! Text command handling.
//!
//! Every layer implements [`CommandHandler`]: the key puzzle interpreter at
//! the bottom, and middleware such as [`TrollFilter`] wrapped around it.
//! A layer either answers a command itself or forwards it to the handler it
//! holds.

mod interpreter;
mod parser;
mod troll;

pub use interpreter::{KeyCommandInterpreter, ACKNOWLEDGEMENT};
pub use parser::{parse, KeyCommand};
pub use troll::{normalize, TrollCommandTable, TrollFilter};

use crate::core::{Actor, TurnOutcome};
use std::fmt;

/// One item produced in response to a command, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Plain acknowledgement shown to the sender.
    Message(String),
    /// Error-styled chat message.
    ChatError(String),
    /// A turn attempt was dispatched and resolved.
    Turn { actor: Actor, outcome: TurnOutcome },
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::ChatError(text) => write!(f, "sendtochaterror {text}"),
            Self::Turn { actor, outcome } => write!(f, "turn {actor}: {outcome:?}"),
        }
    }
}

/// Anything that can answer a text command against an environment `E`.
///
/// An empty response means the command was not understood by this handler.
pub trait CommandHandler<E: ?Sized> {
    fn respond(&mut self, command: &str, env: &mut E) -> Vec<Response>;
}

impl<E: ?Sized, H: CommandHandler<E> + ?Sized> CommandHandler<E> for Box<H> {
    fn respond(&mut self, command: &str, env: &mut E) -> Vec<Response> {
        (**self).respond(command, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StrikeCause;

    #[test]
    fn chat_error_renders_with_prefix() {
        let response = Response::ChatError("nope".to_string());
        assert_eq!(response.to_string(), "sendtochaterror nope");
    }

    #[test]
    fn message_renders_verbatim() {
        assert_eq!(Response::Message("hi".into()).to_string(), "hi");
    }

    #[test]
    fn turn_renders_outcome() {
        let response = Response::Turn {
            actor: Actor::Left,
            outcome: TurnOutcome::WrongTurn(StrikeCause::HostRejected),
        };
        assert_eq!(response.to_string(), "turn left: WrongTurn(HostRejected)");
    }
}
