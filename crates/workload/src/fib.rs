//! Naive recursive Fibonacci
//!
//! `fib(n)` makes exactly `2 * F(n + 1) - 1` calls. At `n = 42` that is
//! roughly 866 million frames, which is the load the profiler is meant to see.

/// Input used by the benchmark entry point
pub const BENCH_N: u64 = 42;

/// `F(BENCH_N)`
pub const BENCH_EXPECTED: u64 = 267_914_296;

/// n-th Fibonacci number with `F(0) = 0`, `F(1) = 1`.
///
/// Exponential on purpose. Kept out-of-line so every call shows up as its own
/// frame in sampled stacks.
///
/// # Panics
/// Overflows `u64` for `n > 93` (panics in debug builds). Recursion depth is
/// `n`, so the stack is never the limit before overflow is.
#[inline(never)]
pub fn fib(n: u64) -> u64 {
    #[cfg(test)]
    calls::record();

    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}
