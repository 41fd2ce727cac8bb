//! Tracing/logging setup shared by binaries and test harnesses.

pub mod config;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let _ = tracing::try_init(&ObservabilityConfig::from_env());
}
