//! One-shot instrumentation toggle
//!
//! ```text
//! Unconfigured ──flag set──▶ Configured   (configure succeeded)
//!              ──flag set──▶ Failed       (configure errored, logged)
//!              ──flag off──▶ Skipped      (client never touched)
//! ```
//!
//! The transition happens once at startup and is terminal. A failed
//! configure never stops the workload from running.

use crate::client::{ProfilerClient, ProfilerError};
use crate::config::ProfilingConfig;
use tracing::{info, warn};

/// Outcome of the startup profiling decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleState {
    /// No decision taken yet
    Unconfigured,
    /// Client configured and reporting
    Configured,
    /// Flag not set; profiling skipped
    Skipped,
    /// Flag set but the client refused to start
    Failed(ProfilerError),
}

impl ToggleState {
    /// Whether the client needs a `shutdown` at the end of the run
    pub fn is_configured(&self) -> bool {
        matches!(self, ToggleState::Configured)
    }
}

/// Startup toggle bound to a single configuration
#[derive(Debug)]
pub struct Toggle {
    state: ToggleState,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Toggle {
    pub fn new() -> Self {
        Self {
            state: ToggleState::Unconfigured,
        }
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Take the startup decision. Later calls return the recorded state
    /// without touching the client again.
    pub fn decide<C>(&mut self, config: &ProfilingConfig, client: &mut C) -> &ToggleState
    where
        C: ProfilerClient + ?Sized,
    {
        if self.state != ToggleState::Unconfigured {
            return &self.state;
        }

        self.state = if !config.enabled {
            info!("Profiling disabled, running workload only");
            ToggleState::Skipped
        } else {
            match client.configure(config.application_name, config.server_address) {
                Ok(()) => {
                    info!(
                        "Profiling enabled: application={}, server={}",
                        config.application_name, config.server_address
                    );
                    ToggleState::Configured
                }
                Err(e) => {
                    warn!("Profiler configuration failed, continuing without it: {}", e);
                    ToggleState::Failed(e)
                }
            }
        };

        &self.state
    }

    /// Take the startup decision with a fresh toggle
    pub fn apply<C>(config: &ProfilingConfig, client: &mut C) -> ToggleState
    where
        C: ProfilerClient + ?Sized,
    {
        Toggle::new().decide(config, client).clone()
    }
}
