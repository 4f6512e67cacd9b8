//! Fibonacci CPU push benchmark
//!
//! No flags, no stdout. Set `PYROSCOPE_AGENT_BENCHMARK_ENABLE_PROFILING` to any
//! non-empty value to push CPU profiles to the ingester while `fib(42)` runs.

use fibbench_agent::{ProfilingConfig, default_client};

fn main() {
    fibbench::init_logging();

    let config = ProfilingConfig::from_env();
    let mut client = default_client(&config);

    fibbench::run(&config, &mut client);
}
