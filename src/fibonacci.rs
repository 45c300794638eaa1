//! Fibonacci numbers, starting 0, 1, 1, 2, 3, ...

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{AlgoError, Result};
use crate::types::FibonacciTrace;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_U64_FIBONACCI_INPUT: u32 = 93;

/// Computes the `n`-th Fibonacci number by naive double recursion.
///
/// No memoization: the call tree has `2*fib(n+1) - 1` nodes.
///
/// `n` must not exceed [`MAX_U64_FIBONACCI_INPUT`]; larger inputs overflow
/// the `u64` sum. Use [`checked_fibonacci`] for untrusted input.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// Validates `n` and then runs [`fibonacci`].
///
/// Negative input, input above `limit`, and input whose result would
/// overflow a `u64` are all rejected with `InvalidArgument`.
pub fn checked_fibonacci(n: i64, limit: u32) -> Result<u64> {
    let n = check_fibonacci_input(n, limit)?;
    debug!(n, "naive fibonacci");
    Ok(fibonacci(n))
}

/// Runs the naive recursion while counting invocations.
///
/// Fails with `InvalidArgument` above [`MAX_U64_FIBONACCI_INPUT`].
pub fn fibonacci_traced(n: u32) -> Result<FibonacciTrace> {
    check_u64_bound(n)?;
    let mut calls = 0;
    let value = traced(n, &mut calls);
    Ok(FibonacciTrace { value, calls })
}

fn traced(n: u32, calls: &mut u64) -> u64 {
    *calls += 1;
    if n <= 1 {
        return u64::from(n);
    }
    traced(n - 1, calls) + traced(n - 2, calls)
}

/// Computes the `n`-th Fibonacci number with a per-call cache, in O(n).
pub fn fibonacci_memo(n: u32) -> Result<u64> {
    check_u64_bound(n)?;
    let mut cache = HashMap::new();
    Ok(memo(n, &mut cache))
}

fn check_u64_bound(n: u32) -> Result<()> {
    if n > MAX_U64_FIBONACCI_INPUT {
        return Err(AlgoError::InvalidArgument {
            message: format!("fibonacci({n}) overflows u64 (max input {MAX_U64_FIBONACCI_INPUT})"),
        });
    }
    Ok(())
}

fn memo(n: u32, cache: &mut HashMap<u32, u64>) -> u64 {
    if let Some(&value) = cache.get(&n) {
        return value;
    }
    if n <= 1 {
        return u64::from(n);
    }
    let value = memo(n - 1, cache) + memo(n - 2, cache);
    cache.insert(n, value);
    value
}

/// Converts a raw input into a recursion depth the naive version accepts.
///
/// Rejects negative `n` and `n` above `limit` or [`MAX_U64_FIBONACCI_INPUT`].
pub fn check_fibonacci_input(n: i64, limit: u32) -> Result<u32> {
    if n < 0 {
        return Err(AlgoError::InvalidArgument {
            message: format!("fibonacci input must be non-negative, got {n}"),
        });
    }
    let bound = limit.min(MAX_U64_FIBONACCI_INPUT);
    match u32::try_from(n) {
        Ok(n) if n <= bound => Ok(n),
        _ => Err(AlgoError::InvalidArgument {
            message: format!("fibonacci input {n} exceeds the limit of {bound}"),
        }),
    }
}
