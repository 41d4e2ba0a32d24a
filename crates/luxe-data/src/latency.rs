//! Simulated network latency for mock sources.

use std::time::Duration;

/// Fixed delay applied before a mock call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// Delay used by the mock services unless configured otherwise.
    pub const DEFAULT: Duration = Duration::from_millis(400);

    /// Create a latency of the given duration.
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    /// Create from milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// No delay at all (for tests and tooling).
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.0
    }

    /// Wait for the configured delay.
    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
