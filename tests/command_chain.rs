//! End-to-end command handling: troll filter, interpreter, engine and host.

use turnkey::builder::PuzzleType;
use turnkey::command::{
    CommandHandler, KeyCommandInterpreter, Response, TrollCommandTable, TrollFilter,
    ACKNOWLEDGEMENT,
};
use turnkey::config::{Policy, SharedPolicy};
use turnkey::core::{Actor, StrikeCause, TurnOutcome};
use turnkey::host::{KeyHost, SoundCue};
use turnkey::sim::RecordingHost;

fn chain(policy: &SharedPolicy) -> TrollFilter<KeyCommandInterpreter> {
    let interpreter = PuzzleType::turn_the_key_advanced().interpreter("5", policy.clone());
    TrollFilter::with_shared_response(
        interpreter,
        ["turn both", "turn all"],
        "There are only two keys, and they turn one at a time.",
        policy.clone(),
    )
}

fn turn(actor: Actor, outcome: TurnOutcome) -> Vec<Response> {
    vec![
        Response::Message(ACKNOWLEDGEMENT.to_string()),
        Response::Turn { actor, outcome },
    ]
}

#[test]
fn full_solve_through_the_chain() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated().with_solved(["Password", "Keypad", "Two Bits"]);

    assert_eq!(
        handler.respond("turn r", &mut host),
        turn(Actor::Right, TurnOutcome::Success)
    );
    assert_eq!(
        handler.respond("TURN LEFT", &mut host),
        turn(Actor::Left, TurnOutcome::SuccessWithReward { bonus: 6 })
    );

    assert_eq!(host.reward(), 6);
    assert_eq!(
        host.messages(),
        ["Reward increased by 6 for defusing module !5 (Turn The Keys)."]
    );
    assert_eq!(host.strikes(), 0);
    assert!(handler.inner().engine().puzzle_state(&host).is_final());
}

#[test]
fn troll_command_never_reaches_the_puzzle() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated();

    let responses = handler.respond("  Turn   BOTH ", &mut host);

    assert_eq!(
        responses,
        vec![Response::ChatError(
            "There are only two keys, and they turn one at a time.".to_string()
        )]
    );
    assert_eq!(host.turn_calls(), 0);
    assert!(handler.inner().engine().history().records().is_empty());
}

#[test]
fn enabled_troll_commands_fall_through_to_the_interpreter() {
    let policy = SharedPolicy::new(Policy {
        enable_troll_commands: true,
        ..Policy::default()
    });
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated();

    // The interpreter does not understand it either, so nothing comes back.
    assert!(handler.respond("turn both", &mut host).is_empty());
    assert_eq!(host.turn_calls(), 0);
}

#[test]
fn unparsed_commands_are_silently_ignored() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated();

    for command in ["turn", "turn up", "twist left", "turn left please", ""] {
        assert!(handler.respond(command, &mut host).is_empty(), "{command:?}");
    }
    assert_eq!(host.turn_calls(), 0);
    assert_eq!(host.strikes(), 0);
}

#[test]
fn strict_ordering_rejects_without_consulting_host() {
    let policy = SharedPolicy::new(Policy {
        enforce_solve_all_before_turning: true,
        ..Policy::default()
    });
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated()
        .with_solved(["Password"])
        .with_unsolved(["Password", "Keypad"]);

    assert_eq!(
        handler.respond("turn left", &mut host),
        turn(Actor::Left, TurnOutcome::WrongTurn(StrikeCause::OrderingViolation))
    );
    assert_eq!(host.turn_calls(), 0);
    assert_eq!(host.strikes(), 1);
    assert_eq!(host.wrong_turns(), [Actor::Left]);
    assert_eq!(host.sounds(), [SoundCue::WrongTurn]);

    // Solving the remaining prerequisites makes the same command legitimate.
    host.solve("Password");
    host.solve("Keypad");
    assert_eq!(
        handler.respond("turn left", &mut host),
        turn(Actor::Left, TurnOutcome::Success)
    );
    assert_eq!(host.strikes(), 1);
}

#[test]
fn policy_changes_apply_to_the_next_command() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated().with_unsolved(["Wires"]);

    policy.update(|p| p.enforce_solve_all_before_turning = true);

    assert_eq!(
        handler.respond("turn right", &mut host),
        turn(Actor::Right, TurnOutcome::WrongTurn(StrikeCause::OrderingViolation))
    );
}

#[test]
fn soft_lock_bypass_is_penalized_but_turns() {
    let policy = SharedPolicy::new(Policy {
        disable_soft_lock: true,
        ..Policy::default()
    });
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated().with_solved(["Simon Says"]);

    assert_eq!(
        handler.respond("turn right", &mut host),
        turn(Actor::Right, TurnOutcome::Success)
    );
    assert!(host.is_turned(Actor::Right));
    assert_eq!(host.before_list(Actor::Right), Some(&[][..]));
    assert_eq!(host.strikes(), 1);

    let history = handler.inner().engine().history();
    assert_eq!(history.strikes_by_cause(StrikeCause::SoftLockBypass), 1);
}

#[test]
fn soft_lock_protection_lets_the_host_refuse() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated().with_solved(["Simon Says"]);

    assert_eq!(
        handler.respond("turn right", &mut host),
        turn(Actor::Right, TurnOutcome::WrongTurn(StrikeCause::HostRejected))
    );
    assert!(!host.is_turned(Actor::Right));
    assert_eq!(host.strikes(), 1);

    // No retry happens on its own; the next command is a fresh attempt.
    assert_eq!(host.turn_calls(), 1);
    handler.respond("turn right", &mut host);
    assert_eq!(host.turn_calls(), 2);
    assert_eq!(host.strikes(), 2);
}

#[test]
fn host_refusal_strikes_each_time() {
    let policy = SharedPolicy::new(Policy::default());
    let mut handler = chain(&policy);
    let mut host = RecordingHost::activated().refusing_turns();

    handler.respond("turn l", &mut host);
    handler.respond("turn l", &mut host);

    assert_eq!(host.strikes(), 2);
    assert_eq!(host.wrong_turns(), [Actor::Left, Actor::Left]);
}

#[test]
fn instances_of_one_type_are_independent() {
    let policy = SharedPolicy::new(Policy::default());
    let puzzle_type = PuzzleType::turn_the_key_advanced();
    let mut first = puzzle_type.interpreter("1", policy.clone());
    let mut second = puzzle_type.interpreter("2", policy);
    let mut host_a = RecordingHost::activated();
    let mut host_b = RecordingHost::activated();

    first.respond("turn left", &mut host_a);
    second.respond("turn right", &mut host_b);
    second.respond("turn left", &mut host_b);

    assert_eq!(host_a.reward(), 0);
    assert_eq!(host_b.messages().len(), 1);
    assert_eq!(first.engine().history().records().len(), 1);
    assert_eq!(second.engine().history().records().len(), 2);
}

#[tokio::test]
async fn forced_resolution_after_partial_solve() {
    let policy = SharedPolicy::new(Policy::default());
    let mut interpreter = PuzzleType::turn_the_key_advanced().interpreter("9", policy);
    let mut host = RecordingHost::activated().with_solved(["Wires"]);

    interpreter.respond("turn left", &mut host);
    interpreter
        .engine()
        .force_solve(&mut host, |_| std::future::ready(()))
        .await;

    assert!(host.is_turned(Actor::Right));
    assert_eq!(host.passes(), 1);
    assert_eq!(host.reward(), 0);

    // Both keys are now turned, so further commands change nothing.
    assert_eq!(
        interpreter.respond("turn right", &mut host),
        turn(Actor::Right, TurnOutcome::Rejected)
    );
    assert_eq!(host.reward(), 0);
}
