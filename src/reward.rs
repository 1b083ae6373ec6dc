//! Ice-cream reward gated on homework
//!
//! [`evaluate`] returns a deferred result that settles after a delay: fulfilled
//! when the homework is done, rejected otherwise. [`present`] matches on the
//! terminal outcome and restyles the message surface.

use crate::deferred::{Deferred, DeferredError, Settled, deferred};
use crate::output::OutputSink;
use crate::random::Deviate;
use std::fmt;
use std::time::Duration;

pub const MESSAGE_SURFACE_ID: &str = "message";
pub const SUCCESS_TEXT: &str = "What flavor do you want?";
pub const FAILURE_TEXT: &str = "Not until you finish your homework!";

pub type RewardOutcome = Settled<(), ()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
}

impl Color {
    pub const SUCCESS: Color = Color::Green;
    pub const FAILURE: Color = Color::Red;
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Green => f.write_str("green"),
            Color::Red => f.write_str("red"),
        }
    }
}

/// A host-rendered text element with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    pub id: String,
    pub text: String,
    pub color: Option<Color>,
}

impl DisplaySurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            color: None,
        }
    }

    pub fn render(&self) -> String {
        match self.color {
            Some(color) => format!("#{} [{}] {}", self.id, color, self.text),
            None => format!("#{} {}", self.id, self.text),
        }
    }
}

/// The homework counts as done when the deviate falls below `probability`.
pub fn homework_done(deviate: &mut impl Deviate, probability: f64) -> bool {
    deviate.next_deviate() < probability
}

/// Settles fulfilled if `homework_done`, rejected otherwise, once `delay` has elapsed.
/// Must be called from within a tokio runtime.
pub fn evaluate(homework_done: bool, delay: Duration) -> Deferred<(), ()> {
    let (resolver, deferred) = deferred();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        log::debug!("Reward state before settling: {}", resolver.state());
        let observer = resolver.subscribe();
        if homework_done {
            resolver.fulfill(());
        } else {
            resolver.reject(());
        }
        log::debug!("Reward state after settling: {}", observer.state());
    });
    deferred
}

pub fn present(outcome: &RewardOutcome, surface: &mut DisplaySurface) {
    let (text, color) = match outcome {
        Settled::Fulfilled(()) => (SUCCESS_TEXT, Color::SUCCESS),
        Settled::Rejected(()) => (FAILURE_TEXT, Color::FAILURE),
    };
    surface.text = text.to_string();
    surface.color = Some(color);
}

/// Decides the homework flag (unless overridden), waits for the reward and
/// prints the restyled message surface.
pub async fn run_reward(
    deviate: &mut impl Deviate,
    probability: f64,
    homework_override: Option<bool>,
    delay: Duration,
    sink: &dyn OutputSink,
) -> Result<DisplaySurface, DeferredError> {
    let done = match homework_override {
        Some(done) => done,
        None => homework_done(deviate, probability),
    };
    log::info!("Homework done: {}", done);

    let outcome = evaluate(done, delay).settled().await?;
    let mut surface = DisplaySurface::new(MESSAGE_SURFACE_ID);
    present(&outcome, &mut surface);
    sink.line(&surface.render());
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use crate::random::FixedDeviates;
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_true_fulfills_after_delay() {
        let started = Instant::now();
        let reward = evaluate(true, DELAY);
        assert!(reward.state().is_pending());

        let outcome = reward.settled().await.unwrap();
        assert_eq!(outcome, Settled::Fulfilled(()));
        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_false_rejects_after_delay() {
        let started = Instant::now();
        let outcome = evaluate(false, DELAY).settled().await.unwrap();
        assert_eq!(outcome, Settled::Rejected(()));
        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_pending_before_delay() {
        let reward = evaluate(true, DELAY);
        tokio::time::sleep(DELAY / 2).await;
        assert!(reward.state().is_pending());
    }

    #[test]
    fn test_present_applies_exactly_one_style() {
        let mut surface = DisplaySurface::new(MESSAGE_SURFACE_ID);
        present(&Settled::Fulfilled(()), &mut surface);
        assert_eq!(surface.text, SUCCESS_TEXT);
        assert_eq!(surface.color, Some(Color::Green));

        present(&Settled::Rejected(()), &mut surface);
        assert_eq!(surface.text, FAILURE_TEXT);
        assert_eq!(surface.color, Some(Color::Red));
    }

    #[test]
    fn test_render() {
        let mut surface = DisplaySurface::new("message");
        assert_eq!(surface.render(), "#message ");
        present(&Settled::Rejected(()), &mut surface);
        assert_eq!(
            surface.render(),
            "#message [red] Not until you finish your homework!"
        );
    }

    #[test]
    fn test_homework_flag_threshold() {
        let mut deviate = FixedDeviates::new([0.2, 0.5, 0.8]);
        assert!(homework_done(&mut deviate, 0.5));
        assert!(!homework_done(&mut deviate, 0.5));
        assert!(!homework_done(&mut deviate, 0.5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reward_override_skips_deviate() {
        let sink = MemorySink::new();
        let mut deviate = FixedDeviates::new([0.0]);
        let surface = run_reward(&mut deviate, 0.5, Some(false), DELAY, &sink)
            .await
            .unwrap();

        assert_eq!(surface.color, Some(Color::FAILURE));
        assert_eq!(
            sink.lines(),
            vec!["#message [red] Not until you finish your homework!"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reward_draws_flag() {
        let sink = MemorySink::new();
        let mut deviate = FixedDeviates::new([0.1]);
        let surface = run_reward(&mut deviate, 0.5, None, DELAY, &sink)
            .await
            .unwrap();

        assert_eq!(surface.text, SUCCESS_TEXT);
        assert_eq!(sink.lines(), vec!["#message [green] What flavor do you want?"]);
    }
}
