//! Stub client for builds without the "pyroscope" feature.
//!
//! Accepts every request so the benchmark still runs, and logs that nothing
//! will be reported.

use crate::client::{ProfilerClient, ProfilerError};
use tracing::warn;

const FEATURE_MSG: &str =
    "pyroscope feature not enabled. Rebuild with: cargo build --features pyroscope";

/// Profiler client that reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClient;

impl ProfilerClient for NoopClient {
    fn configure(
        &mut self,
        application_name: &str,
        _server_address: &str,
    ) -> Result<(), ProfilerError> {
        warn!("Profiling requested for {} but {}", application_name, FEATURE_MSG);
        Ok(())
    }
}
