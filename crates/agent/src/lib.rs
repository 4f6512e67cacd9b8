//! Instrumentation toggle for the Fibonacci CPU push benchmark
//!
//! - `config`: reads the enable flag once at startup
//! - `client`: the `ProfilerClient` seam and its error type
//! - `toggle`: the one-shot Unconfigured → Configured/Skipped/Failed decision
//! - `pyroscope_client` / `noop_client`: the concrete client, picked by the
//!   `pyroscope` feature

pub mod client;
pub mod config;
pub mod toggle;

#[cfg(feature = "pyroscope")]
pub mod pyroscope_client;

#[cfg(not(feature = "pyroscope"))]
pub mod noop_client;

pub use client::{ProfilerClient, ProfilerError};
pub use config::{
    APPLICATION_NAME, DEFAULT_SAMPLE_RATE, ENABLE_PROFILING_VAR, ProfilingConfig, SERVER_ADDRESS,
    is_truthy,
};
pub use toggle::{Toggle, ToggleState};

#[cfg(feature = "pyroscope")]
pub use pyroscope_client::PyroscopeClient;

#[cfg(not(feature = "pyroscope"))]
pub use noop_client::NoopClient;

/// Client used by the benchmark binary for this build's feature set
#[cfg(feature = "pyroscope")]
pub fn default_client(config: &ProfilingConfig) -> PyroscopeClient {
    PyroscopeClient::new(config.sample_rate)
}

/// Client used by the benchmark binary for this build's feature set
#[cfg(not(feature = "pyroscope"))]
pub fn default_client(_config: &ProfilingConfig) -> NoopClient {
    NoopClient
}
