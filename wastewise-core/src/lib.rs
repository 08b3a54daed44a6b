//! Core types and service wiring for the wastewise operations API.

/// Per-vehicle route progress and its one-way completion.
pub mod fleet;
/// Domain models and identifiers shared by all backends.
pub mod model;
/// Bundles of backend implementations plugged into the service.
pub mod plugin;
/// Traits describing the external backend capabilities.
pub mod ports;
/// Artificial latencies applied by the simulated backends.
pub mod profile;
/// In-memory citizen report collection.
pub mod reports;
/// High-level service facade used by the API surface.
pub mod service;
/// Required-field checks applied before any processing.
pub mod validate;

pub use fleet::*;
pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use profile::*;
pub use reports::*;
pub use service::*;
pub use validate::*;
