//! Simulated network latency.
//!
//! Mutations pause on a [`Latency`] implementation before publishing their
//! effect. Tests inject [`NoLatency`] or drive [`FixedLatency`] with tokio's
//! paused clock.

use std::future::Future;
use std::time::Duration;

/// Async boundary standing in for a network round trip.
pub trait Latency: Send + Sync {
    /// Completes once the simulated round trip is over.
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// Resolves immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Sleeps on the tokio timer for a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    /// Creates a latency of `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a latency of `millis` milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Latency for FixedLatency {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_latency_waits_for_delay() {
        let latency = FixedLatency::from_millis(500);
        let start = tokio::time::Instant::now();
        latency.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_no_latency_is_immediate() {
        let start = std::time::Instant::now();
        NoLatency.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
