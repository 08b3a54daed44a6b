//! Command line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use wastewise_core::profile::SimulationProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Which implementation answers identification and scan requests.
pub enum Backend {
    /// Randomised in-process stand-ins.
    Sim,
    /// External HTTP service at `--remote-url`.
    Remote,
}

#[derive(Debug, Parser)]
/// Server settings, read from flags with environment fallbacks.
#[command(name = "wastewise")]
#[command(about = "Waste operations API: reports, identification, QR scans and fleet tracking")]
pub struct Settings {
    /// Address to listen on
    #[arg(long, env = "WASTEWISE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Simulated identification latency in milliseconds
    #[arg(long, env = "WASTEWISE_IDENTIFY_MS", default_value_t = 1500)]
    pub identify_ms: u64,

    /// Simulated QR scan latency in milliseconds
    #[arg(long, env = "WASTEWISE_SCAN_MS", default_value_t = 1000)]
    pub scan_ms: u64,

    /// Simulated report intake latency in milliseconds
    #[arg(long, env = "WASTEWISE_REPORT_MS", default_value_t = 1000)]
    pub report_ms: u64,

    /// Simulated notification dispatch latency in milliseconds
    #[arg(long, env = "WASTEWISE_NOTIFY_MS", default_value_t = 500)]
    pub notify_ms: u64,

    /// Backend for identification and scans
    #[arg(long, env = "WASTEWISE_BACKEND", value_enum, default_value_t = Backend::Sim)]
    pub backend: Backend,

    /// Base URL of the remote backend
    #[arg(long, env = "WASTEWISE_REMOTE_URL", required_if_eq("backend", "remote"))]
    pub remote_url: Option<String>,

    /// Start with an empty report collection
    #[arg(long, env = "WASTEWISE_NO_DEMO_DATA")]
    pub no_demo_data: bool,

    /// Log filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}

impl Settings {
    /// Latencies for the simulated operations.
    #[must_use]
    pub fn profile(&self) -> SimulationProfile {
        SimulationProfile {
            identify: Duration::from_millis(self.identify_ms),
            scan: Duration::from_millis(self.scan_ms),
            report_intake: Duration::from_millis(self.report_ms),
            notification: Duration::from_millis(self.notify_ms),
        }
    }
}
