#![no_main]
use libfuzzer_sys::fuzz_target;

/// Full divisor scan, no square-root cutoff. Only used for small inputs.
fn is_prime_reference(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

fuzz_target!(|n: i32| {
    let n = i64::from(n);
    // Should never panic for any input
    let claimed = mathfns::is_prime(n);
    if n.abs() < 65_536 {
        assert_eq!(claimed, is_prime_reference(n));
    }
});
