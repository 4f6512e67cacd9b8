//! Fibonacci CPU push benchmark
//!
//! Runs `fib(42)` once, optionally under a continuous profiler:
//!
//! 1. read `ProfilingConfig` from the environment
//! 2. take the one-shot toggle decision (configure the client or skip)
//! 3. run the workload on the calling thread
//! 4. stop the client if it was configured
//!
//! The binary only wires the real environment and client into [`run`]; tests
//! drive [`run_with`] with a recording client and workload.

use std::hint::black_box;
use std::time::{Duration, Instant};

use fibbench_agent::{ProfilerClient, ProfilingConfig, Toggle, ToggleState};
use fibbench_workload::{BENCH_N, fib};
use tracing::{info, warn};

/// What a single benchmark run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal toggle state
    pub state: ToggleState,
    /// Workload result
    pub result: u64,
    /// Wall time spent in the workload alone
    pub elapsed: Duration,
}

/// Run the benchmark with an arbitrary workload
pub fn run_with<C, W>(config: &ProfilingConfig, client: &mut C, n: u64, workload: W) -> RunReport
where
    C: ProfilerClient + ?Sized,
    W: FnOnce(u64) -> u64,
{
    let state = Toggle::apply(config, client);

    let start = Instant::now();
    let result = workload(n);
    let elapsed = start.elapsed();

    if state.is_configured()
        && let Err(e) = client.shutdown()
    {
        warn!("Profiler shutdown failed: {}", e);
    }

    RunReport {
        state,
        result,
        elapsed,
    }
}

/// Run `fib(42)` under the given config and client
pub fn run<C>(config: &ProfilingConfig, client: &mut C) -> RunReport
where
    C: ProfilerClient + ?Sized,
{
    let report = run_with(config, client, BENCH_N, |n| fib(black_box(n)));
    info!(
        "fib({}) = {} in {} ms",
        BENCH_N,
        report.result,
        report.elapsed.as_millis()
    );
    report
}

/// Install the stderr subscriber used by the binary.
///
/// `RUST_LOG` overrides the default `info` level. Stdout stays untouched.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
