use crate::error::MathError;

/// Largest `n` for which F(n) fits in a u64.
pub const MAX_FIB_INPUT: u64 = 93;

/// Compute the nth Fibonacci number under the convention F(0) = 0, F(1) = 1.
///
/// Textbook double recursion with no memoization, so cost grows
/// exponentially in `n`. Inputs above [`MAX_FIB_INPUT`] would overflow u64
/// and are rejected before any recursion happens.
pub fn fibonacci(n: u64) -> Result<u64, MathError> {
    if n > MAX_FIB_INPUT {
        return Err(MathError::overflow("fibonacci", n, MAX_FIB_INPUT));
    }
    Ok(fib(n))
}

// F(93) = 12200160415121876738 is the last term below u64::MAX; the bound
// check in `fibonacci` keeps the addition here from wrapping.
fn fib(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}
