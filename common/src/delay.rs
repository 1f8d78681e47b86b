use std::time::Duration;

use async_trait::async_trait;

/// Bounds of a uniformly distributed pause, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayWindow {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl DelayWindow {
    pub const fn between(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    pub const fn fixed(secs: f64) -> Self {
        Self::between(secs, secs)
    }

    pub fn min(&self) -> Duration {
        Duration::from_secs_f64(self.min_secs)
    }

    pub fn max(&self) -> Duration {
        Duration::from_secs_f64(self.max_secs)
    }
}

/// Strategy for the cosmetic pauses of the simulated pipeline.
///
/// Pauses carry no meaning; an implementation may skip them entirely.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self, window: DelayWindow);
}
