//! Pyroscope push-mode client
//!
//! `configure` builds an agent with the pprof-rs CPU backend and starts it.
//! The agent samples on its own timer and pushes to the server from a
//! background thread. `shutdown` stops the agent, which sends the final
//! report, then tears it down.
//!
//! ## Feature Flag
//!
//! This module requires the `pyroscope` feature (enabled by default).
//! When disabled, `noop_client.rs` provides the client instead.

#![cfg(feature = "pyroscope")]

use crate::client::{ProfilerClient, ProfilerError};
use pyroscope::PyroscopeAgent;
use pyroscope::pyroscope::PyroscopeAgentRunning;
use pyroscope_pprofrs::{PprofConfig, pprof_backend};
use tracing::debug;

/// Profiler client backed by a Pyroscope agent
pub struct PyroscopeClient {
    sample_rate: u32,
    agent: Option<PyroscopeAgent<PyroscopeAgentRunning>>,
}

impl PyroscopeClient {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            agent: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.agent.is_some()
    }
}

fn agent_error(e: impl std::fmt::Display) -> ProfilerError {
    ProfilerError::Agent(e.to_string())
}

impl ProfilerClient for PyroscopeClient {
    fn configure(
        &mut self,
        application_name: &str,
        server_address: &str,
    ) -> Result<(), ProfilerError> {
        if self.agent.is_some() {
            return Err(ProfilerError::AlreadyConfigured);
        }

        let backend = pprof_backend(PprofConfig::new().sample_rate(self.sample_rate));
        let agent = PyroscopeAgent::builder(server_address, application_name)
            .backend(backend)
            .build()
            .map_err(agent_error)?;

        let running = agent.start().map_err(agent_error)?;
        debug!(
            "Pyroscope agent started at {} Hz for {}",
            self.sample_rate, application_name
        );
        self.agent = Some(running);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), ProfilerError> {
        let Some(running) = self.agent.take() else {
            return Ok(());
        };

        let ready = running.stop().map_err(agent_error)?;
        ready.shutdown();
        debug!("Pyroscope agent stopped");
        Ok(())
    }
}
