//! Forced resolution: unlock both keys and pass the puzzle, bypassing every rule.
//!
//! The sequence is described as an ordered list of steps. Waiting is left to
//! the host's scheduler through an async delay function, so other puzzle
//! instances keep running while this one waits.

use crate::core::Actor;
use crate::host::{EffectSink, KeyHost, SoundCue};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Gap between unlocking the right key, the left key and passing.
pub const UNLOCK_INTERVAL: Duration = Duration::from_millis(100);

/// One step of a forced resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionStep {
    /// Give control back to the scheduler once before starting.
    Yield,
    MarkTurned(Actor),
    Unlock(Actor),
    PlaySound(SoundCue),
    Wait(Duration),
    Pass,
}

/// The forced-resolution sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForcedResolution;

impl ForcedResolution {
    /// The steps in execution order.
    pub fn steps() -> Vec<ResolutionStep> {
        vec![
            ResolutionStep::Yield,
            ResolutionStep::MarkTurned(Actor::Left),
            ResolutionStep::MarkTurned(Actor::Right),
            ResolutionStep::Unlock(Actor::Right),
            ResolutionStep::PlaySound(SoundCue::TurnSuccess),
            ResolutionStep::Wait(UNLOCK_INTERVAL),
            ResolutionStep::Unlock(Actor::Left),
            ResolutionStep::PlaySound(SoundCue::TurnSuccess),
            ResolutionStep::Wait(UNLOCK_INTERVAL),
            ResolutionStep::Pass,
        ]
    }

    /// Run every step against `env`.
    ///
    /// `delay` is the host scheduler's cooperative wait. `Yield` is passed
    /// through as a zero-length delay. The sequence cannot be cancelled once
    /// started short of dropping the future.
    pub async fn run<E, D, Fut>(env: &mut E, mut delay: D)
    where
        E: KeyHost + EffectSink + ?Sized,
        D: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        info!("forcing key puzzle resolution");
        for step in Self::steps() {
            debug!(?step, "resolution step");
            match step {
                ResolutionStep::Yield => delay(Duration::ZERO).await,
                ResolutionStep::Wait(duration) => delay(duration).await,
                other => Self::apply(env, other),
            }
        }
    }

    /// Apply a non-waiting step.
    fn apply<E>(env: &mut E, step: ResolutionStep)
    where
        E: KeyHost + EffectSink + ?Sized,
    {
        match step {
            ResolutionStep::MarkTurned(actor) => env.force_turned(actor),
            ResolutionStep::Unlock(actor) => env.set_unlocked(actor),
            ResolutionStep::PlaySound(cue) => env.play_sound(cue),
            ResolutionStep::Pass => env.handle_pass(),
            ResolutionStep::Yield | ResolutionStep::Wait(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RecordingHost;
    use std::future::ready;

    #[test]
    fn steps_unlock_right_before_left() {
        let steps = ForcedResolution::steps();
        let right = steps
            .iter()
            .position(|s| *s == ResolutionStep::Unlock(Actor::Right))
            .unwrap();
        let left = steps
            .iter()
            .position(|s| *s == ResolutionStep::Unlock(Actor::Left))
            .unwrap();
        assert!(right < left);
        assert_eq!(steps.first(), Some(&ResolutionStep::Yield));
        assert_eq!(steps.last(), Some(&ResolutionStep::Pass));
    }

    #[tokio::test]
    async fn run_turns_both_keys_and_passes() {
        let mut host = RecordingHost::new();
        let mut waits = Vec::new();

        ForcedResolution::run(&mut host, |d| {
            waits.push(d);
            ready(())
        })
        .await;

        assert!(host.is_turned(Actor::Left));
        assert!(host.is_turned(Actor::Right));
        assert_eq!(host.unlocked(), [Actor::Right, Actor::Left]);
        assert_eq!(host.sounds(), [SoundCue::TurnSuccess, SoundCue::TurnSuccess]);
        assert_eq!(host.passes(), 1);
        assert_eq!(host.strikes(), 0);
        assert_eq!(waits, vec![Duration::ZERO, UNLOCK_INTERVAL, UNLOCK_INTERVAL]);
    }

    #[tokio::test]
    async fn run_with_real_sleep_waits_between_unlocks() {
        let mut host = RecordingHost::new();
        let started = std::time::Instant::now();

        ForcedResolution::run(&mut host, tokio::time::sleep).await;

        assert!(started.elapsed() >= UNLOCK_INTERVAL * 2);
        assert_eq!(host.passes(), 1);
    }
}
