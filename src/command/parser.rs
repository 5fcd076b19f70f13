//! Parser for the two-key puzzle's command grammar.
//!
//! ```text
//! turn (l | left | r | right)
//! ```
//!
//! Matching is case-insensitive and tolerant of surrounding and repeated
//! whitespace.

use crate::core::Actor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(Actor),
    /// Not a command this puzzle understands.
    NoAction,
}

pub fn parse(text: &str) -> KeyCommand {
    let lowered = text.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    match tokens.as_slice() {
        ["turn", "l" | "left"] => KeyCommand::Turn(Actor::Left),
        ["turn", "r" | "right"] => KeyCommand::Turn(Actor::Right),
        _ => KeyCommand::NoAction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(parse("turn left"), KeyCommand::Turn(Actor::Left));
        assert_eq!(parse("turn l"), KeyCommand::Turn(Actor::Left));
        assert_eq!(parse("turn right"), KeyCommand::Turn(Actor::Right));
        assert_eq!(parse("turn r"), KeyCommand::Turn(Actor::Right));
    }

    #[test]
    fn ignores_case_and_whitespace() {
        assert_eq!(parse("Turn Right"), KeyCommand::Turn(Actor::Right));
        assert_eq!(parse("  TURN \t  LeFt  "), KeyCommand::Turn(Actor::Left));
    }

    #[test]
    fn unknown_direction_is_no_action() {
        assert_eq!(parse("turn up"), KeyCommand::NoAction);
    }

    #[test]
    fn wrong_token_count_is_no_action() {
        assert_eq!(parse("turn"), KeyCommand::NoAction);
        assert_eq!(parse("turn left now"), KeyCommand::NoAction);
        assert_eq!(parse(""), KeyCommand::NoAction);
    }

    #[test]
    fn wrong_verb_is_no_action() {
        assert_eq!(parse("press left"), KeyCommand::NoAction);
        assert_eq!(parse("left turn"), KeyCommand::NoAction);
    }
}
