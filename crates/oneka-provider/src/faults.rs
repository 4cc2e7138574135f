//! Fault-injection strategies for the mock provider.
//!
//! The provider asks its [`FaultPolicy`] two questions per call: how long to
//! wait, then whether to fail. [`RandomFaults`] answers with a uniform draw
//! from an RNG; the deterministic policies let tests force either branch.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-open latency window `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyWindow {
    pub min: Duration,
    pub max: Duration,
}

impl LatencyWindow {
    /// No artificial delay.
    pub const ZERO: Self = Self {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    #[must_use]
    pub const fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    /// `true` when the window cannot produce anything but `min`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Strategy deciding artificial latency and injected failures.
pub trait FaultPolicy: Send + Sync {
    /// Delay to apply before answering. Must lie in `[window.min, window.max)`,
    /// or equal `window.min` when the window is degenerate.
    fn latency(&self, window: LatencyWindow) -> Duration;

    /// Whether this call should fail, given the configured probability.
    fn should_fail(&self, probability: f64) -> bool;
}

// ---------------------------------------------------------------------------
// RandomFaults
// ---------------------------------------------------------------------------

/// Uniform random latency and independent per-call failures.
#[derive(Debug)]
pub struct RandomFaults {
    rng: Mutex<StdRng>,
}

impl RandomFaults {
    /// Reproducible draws from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl FaultPolicy for RandomFaults {
    fn latency(&self, window: LatencyWindow) -> Duration {
        if window.is_degenerate() {
            return window.min;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(window.min..window.max)
    }

    fn should_fail(&self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.r#gen::<f64>() < probability
    }
}

// ---------------------------------------------------------------------------
// Deterministic policies
// ---------------------------------------------------------------------------

/// Never fails; waits the window's lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FaultPolicy for NeverFail {
    fn latency(&self, window: LatencyWindow) -> Duration {
        window.min
    }

    fn should_fail(&self, _probability: f64) -> bool {
        false
    }
}

/// Always fails; waits the window's lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FaultPolicy for AlwaysFail {
    fn latency(&self, window: LatencyWindow) -> Duration {
        window.min
    }

    fn should_fail(&self, _probability: f64) -> bool {
        true
    }
}

/// Replays a fixed sequence of outcomes (`true` = fail), one per call.
/// Succeeds once the script is exhausted.
#[derive(Debug, Default)]
pub struct ScriptedFaults {
    outcomes: Mutex<VecDeque<bool>>,
}

impl ScriptedFaults {
    #[must_use]
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    /// Fail `n` times, then succeed.
    #[must_use]
    pub fn failures_then_success(n: usize) -> Self {
        Self::new(std::iter::repeat_n(true, n))
    }

    /// Outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl FaultPolicy for ScriptedFaults {
    fn latency(&self, window: LatencyWindow) -> Duration {
        window.min
    }

    fn should_fail(&self, _probability: f64) -> bool {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_latency_stays_in_window() {
        let faults = RandomFaults::seeded(7);
        let window = LatencyWindow::from_millis(1000, 2000);
        for _ in 0..500 {
            let delay = faults.latency(window);
            assert!(delay >= window.min && delay < window.max, "{delay:?}");
        }
    }

    #[test]
    fn degenerate_window_returns_min() {
        let faults = RandomFaults::seeded(7);
        assert_eq!(faults.latency(LatencyWindow::ZERO), Duration::ZERO);
        let window = LatencyWindow::from_millis(300, 100);
        assert_eq!(faults.latency(window), Duration::from_millis(300));
    }

    #[test]
    fn probability_bounds() {
        let faults = RandomFaults::seeded(11);
        assert!((0..200).all(|_| !faults.should_fail(0.0)));
        assert!((0..200).all(|_| faults.should_fail(1.0)));
    }

    #[test]
    fn same_seed_same_draws() {
        let a = RandomFaults::seeded(42);
        let b = RandomFaults::seeded(42);
        let window = LatencyWindow::from_millis(0, 10_000);
        for _ in 0..50 {
            assert_eq!(a.latency(window), b.latency(window));
            assert_eq!(a.should_fail(0.5), b.should_fail(0.5));
        }
    }

    #[test]
    fn scripted_outcomes_replay_in_order() {
        let faults = ScriptedFaults::new([true, false, true]);
        assert!(faults.should_fail(0.0));
        assert!(!faults.should_fail(1.0));
        assert!(faults.should_fail(0.0));
        assert_eq!(faults.remaining(), 0);
        assert!(!faults.should_fail(1.0));
    }

    #[test]
    fn failures_then_success_counts() {
        let faults = ScriptedFaults::failures_then_success(2);
        assert_eq!(faults.remaining(), 2);
        assert!(faults.should_fail(0.2));
        assert!(faults.should_fail(0.2));
        assert!(!faults.should_fail(0.2));
    }
}
