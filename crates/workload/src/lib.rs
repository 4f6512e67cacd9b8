//! CPU-bound workload for profiler benchmarks
//!
//! The workload is a naive doubly-recursive Fibonacci. It exists to produce a
//! deep, predictable call tree that a sampling profiler should report as a
//! single hot `fib` stack, so it must never be memoized or made iterative.

pub mod fib;

pub use fib::{BENCH_EXPECTED, BENCH_N, fib};
