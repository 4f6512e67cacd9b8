//! Profiling configuration
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PYROSCOPE_AGENT_BENCHMARK_ENABLE_PROFILING` | unset (disabled) | Any non-empty value enables profiling |
//!
//! ## Truthiness
//!
//! Presence of a non-empty value is the only test. `"0"`, `"false"` and
//! `"no"` all enable profiling, matching how the other language variants of
//! this benchmark read the flag. The runner sets it to `true` or leaves it
//! unset, so nothing finer is needed.
//!
//! ## Example
//!
//! ```bash
//! # Run the workload alone
//! ./fib-cpu-push
//!
//! # Run it with the profiler pushing to the ingester
//! PYROSCOPE_AGENT_BENCHMARK_ENABLE_PROFILING=1 ./fib-cpu-push
//! ```

use std::ffi::{OsStr, OsString};

/// Environment flag gating the profiler
pub const ENABLE_PROFILING_VAR: &str = "PYROSCOPE_AGENT_BENCHMARK_ENABLE_PROFILING";

/// Application name reported to the profiling server
pub const APPLICATION_NAME: &str = "fibonacci-python-cpu-push";

/// Ingestion endpoint on the benchmark network
pub const SERVER_ADDRESS: &str = "http://ingester:4040";

/// CPU sampling frequency in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 100;

/// Startup configuration, read once and never re-evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilingConfig {
    /// Whether the profiler client should be configured
    pub enabled: bool,
    pub application_name: &'static str,
    pub server_address: &'static str,
    /// Sampling frequency in Hz
    pub sample_rate: u32,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            enabled: false, // Disabled unless the flag is set
            application_name: APPLICATION_NAME,
            server_address: SERVER_ADDRESS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl ProfilingConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let enabled = is_truthy(lookup(ENABLE_PROFILING_VAR).as_deref());

        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Config with profiling switched on, for callers that skip the environment
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Present and non-empty
pub fn is_truthy(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<OsString> {
        move |key| {
            assert_eq!(key, ENABLE_PROFILING_VAR);
            value.map(OsString::from)
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ProfilingConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.application_name, "fibonacci-python-cpu-push");
        assert_eq!(config.server_address, "http://ingester:4040");
        assert_eq!(config.sample_rate, 100);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(OsStr::new(""))));
        assert!(is_truthy(Some(OsStr::new("1"))));
        assert!(is_truthy(Some(OsStr::new("true"))));
        assert!(is_truthy(Some(OsStr::new(" "))));
    }

    #[test]
    fn test_false_like_values_still_enable() {
        for value in ["0", "false", "FALSE", "no", "off"] {
            assert!(is_truthy(Some(OsStr::new(value))), "{:?}", value);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_enables() {
        use std::os::unix::ffi::OsStrExt;
        assert!(is_truthy(Some(OsStr::from_bytes(&[0xff, 0xfe]))));
    }

    #[test]
    fn test_from_lookup() {
        assert!(!ProfilingConfig::from_lookup(lookup_with(None)).enabled);
        assert!(!ProfilingConfig::from_lookup(lookup_with(Some(""))).enabled);
        assert!(ProfilingConfig::from_lookup(lookup_with(Some("1"))).enabled);
        assert_eq!(
            ProfilingConfig::from_lookup(lookup_with(Some("true"))),
            ProfilingConfig::enabled()
        );
    }

    // Helper to set env var (caller must be #[serial])
    unsafe fn set_env(key: &str, value: &str) {
        // SAFETY: serialized by caller
        unsafe { std::env::set_var(key, value) };
    }

    // Helper to restore env var (caller must be #[serial])
    unsafe fn restore_env(key: &str, orig: Option<OsString>) {
        // SAFETY: serialized by caller
        unsafe {
            match orig {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_set() {
        let orig = std::env::var_os(ENABLE_PROFILING_VAR);

        // SAFETY: #[serial]
        unsafe {
            set_env(ENABLE_PROFILING_VAR, "true");
        }

        let config = ProfilingConfig::from_env();
        assert!(config.enabled);

        // SAFETY: #[serial]
        unsafe {
            restore_env(ENABLE_PROFILING_VAR, orig);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_empty_and_unset() {
        let orig = std::env::var_os(ENABLE_PROFILING_VAR);

        // SAFETY: #[serial]
        unsafe {
            set_env(ENABLE_PROFILING_VAR, "");
        }
        assert!(!ProfilingConfig::from_env().enabled);

        // SAFETY: #[serial]
        unsafe {
            restore_env(ENABLE_PROFILING_VAR, None);
        }
        assert!(!ProfilingConfig::from_env().enabled);

        // SAFETY: #[serial]
        unsafe {
            restore_env(ENABLE_PROFILING_VAR, orig);
        }
    }
}
