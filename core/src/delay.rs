use async_trait::async_trait;

use autorecon_common::delay::{Delay, DelayWindow};

/// Sleeps for a duration drawn uniformly from the window.
pub struct RandomDelay;

/// Returns immediately. Used by `--no-delay` and by tests.
pub struct NoDelay;

#[async_trait]
impl Delay for RandomDelay {
    async fn pause(&self, window: DelayWindow) {
        let secs = if window.max_secs > window.min_secs {
            rand::random_range(window.min_secs..=window.max_secs)
        } else {
            window.min_secs
        };
        tokio::time::sleep(std::time::Duration::from_secs_f64(secs.max(0.0))).await;
    }
}

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self, _window: DelayWindow) {}
}
