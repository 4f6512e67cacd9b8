//! Profiler client seam
//!
//! The benchmark only ever asks a profiler to start (`configure`) and, at the
//! end of the run, to flush and stop (`shutdown`). Sampling, batching and
//! upload all live behind the implementation.

/// Errors surfaced by a profiler client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilerError {
    /// The underlying agent failed to build, start or stop
    Agent(String),
    /// `configure` was called on a client that is already running
    AlreadyConfigured,
}

impl std::fmt::Display for ProfilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfilerError::Agent(msg) => write!(f, "Profiler agent error: {}", msg),
            ProfilerError::AlreadyConfigured => write!(f, "Profiler is already configured"),
        }
    }
}

impl std::error::Error for ProfilerError {}

/// External profiling client
pub trait ProfilerClient {
    /// Start reporting profiles for `application_name` to `server_address`.
    ///
    /// Called at most once per process, before the workload runs.
    fn configure(
        &mut self,
        application_name: &str,
        server_address: &str,
    ) -> Result<(), ProfilerError>;

    /// Flush and stop. Only called after a successful `configure`.
    fn shutdown(&mut self) -> Result<(), ProfilerError> {
        Ok(())
    }
}

impl<C: ProfilerClient + ?Sized> ProfilerClient for &mut C {
    fn configure(
        &mut self,
        application_name: &str,
        server_address: &str,
    ) -> Result<(), ProfilerError> {
        (**self).configure(application_name, server_address)
    }

    fn shutdown(&mut self) -> Result<(), ProfilerError> {
        (**self).shutdown()
    }
}
