//! Artificial latencies for the simulated backends and report intake.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How long each simulated operation suspends before answering.
pub struct SimulationProfile {
    /// Waste identification. Longest, models inference cost.
    pub identify: Duration,
    /// QR scan lookup.
    pub scan: Duration,
    /// Report creation.
    pub report_intake: Duration,
    /// Notification setup.
    pub notification: Duration,
}

impl SimulationProfile {
    /// Profile without any delay, for tests and local tooling.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            identify: Duration::ZERO,
            scan: Duration::ZERO,
            report_intake: Duration::ZERO,
            notification: Duration::ZERO,
        }
    }
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            identify: Duration::from_millis(1500),
            scan: Duration::from_millis(1000),
            report_intake: Duration::from_millis(1000),
            notification: Duration::from_millis(500),
        }
    }
}

/// Suspend the current task for `latency`, skipping the timer entirely when zero.
pub async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
