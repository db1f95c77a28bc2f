//! Minimum visible duration of the loading indicator.
//!
//! A fast response would make the spinner flash for a single frame. The
//! pacer keeps a successful fetch "in flight" until a randomized target
//! duration has passed since the request started. It never delays a response
//! that was already slower than the target.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::LoadingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPacer {
    min: Duration,
    max: Duration,
}

impl LoadingPacer {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn from_config(config: &LoadingConfig) -> Self {
        Self::new(
            Duration::from_millis(config.min_visible_ms),
            Duration::from_millis(config.max_visible_ms),
        )
    }

    /// Pacer that never waits.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Pick a target duration in `[min, max)`, or `min` when the window is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        if max_ms <= min_ms {
            return self.min;
        }
        Duration::from_millis(rng.random_range(min_ms..max_ms))
    }

    /// Time still to wait so the indicator stays up for `target` in total.
    pub fn remaining(target: Duration, elapsed: Duration) -> Duration {
        target.saturating_sub(elapsed)
    }

    /// Sleep until a freshly sampled target has elapsed since `started`.
    pub async fn hold(&self, started: Instant) {
        let target = self.sample(&mut rand::rng());
        let wait = Self::remaining(target, started.elapsed());
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}

impl Default for LoadingPacer {
    fn default() -> Self {
        Self::from_config(&LoadingConfig::default())
    }
}
