//! Command Session
//!
//! Drives one two-key puzzle through a scripted chat session against the
//! in-memory recording host.
//!
//! Key concepts:
//! - Troll-command middleware wrapped around the puzzle interpreter
//! - Policy flags flipped at runtime by their owner
//! - Strikes tagged with their cause in the turn history
//!
//! Run with: RUST_LOG=turnkey=debug cargo run --example command_session

use turnkey::builder::PuzzleType;
use turnkey::command::{CommandHandler, TrollFilter};
use turnkey::config::{Policy, SharedPolicy};
use turnkey::engine::UNLOCK_INTERVAL;
use turnkey::sim::RecordingHost;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Command Session Example ===\n");

    let policy = SharedPolicy::new(Policy {
        enforce_solve_all_before_turning: true,
        ..Policy::default()
    });
    let puzzle_type = PuzzleType::turn_the_key_advanced();
    let interpreter = puzzle_type.interpreter("4", policy.clone());
    println!("Help: {}\n", interpreter.help_text());

    let mut handler = TrollFilter::with_shared_response(
        interpreter,
        ["turn both", "turn all keys"],
        "Nice try.",
        policy.clone(),
    );

    let mut host = RecordingHost::activated()
        .with_solved(["Password", "Morse Code"])
        .with_unsolved(["Keypad"]);

    let script = ["turn both", "turn left", "turn right", "spin left"];
    for command in script {
        println!("> {command}");
        for response in handler.respond(command, &mut host) {
            println!("  {response}");
        }
    }

    println!("\nSolving Keypad and relaxing the ordering policy...");
    host.solve("Keypad");
    policy.update(|p| p.enforce_solve_all_before_turning = false);

    println!("> turn l");
    for response in handler.respond("turn l", &mut host) {
        println!("  {response}");
    }

    let history = handler.inner().engine().history();
    println!("\nStrikes: {}", host.strikes());
    for record in history.records() {
        println!("  {} -> {:?} {:?}", record.actor, record.outcome, record.strikes);
    }
    println!("Reward: {}", host.reward());
    for message in host.messages() {
        println!("Chat: {message}");
    }

    println!("\nForce-solving a second instance...");
    let second = puzzle_type.instantiate("8");
    let mut other_host = RecordingHost::activated();
    second.force_solve(&mut other_host, tokio::time::sleep).await;
    println!(
        "  passed: {} (unlock interval {:?})",
        other_host.passes() == 1,
        UNLOCK_INTERVAL
    );

    println!("\n=== Example Complete ===");
}
