// Property tests for fibonacci:
// 1. The defining recurrence holds everywhere it is testable
// 2. The recursive implementation agrees with an iterative reference
// 3. Evaluation is deterministic
// 4. Out-of-range inputs fail fast instead of recursing

use mathfns::fibonacci;
use proptest::prelude::*;

// Iterative reference for cross-checking the recursive implementation.
fn fib_iterative(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn recurrence_identity(n in 2..=25u64) {
        prop_assert_eq!(
            fibonacci(n).unwrap(),
            fibonacci(n - 1).unwrap() + fibonacci(n - 2).unwrap()
        );
    }

    #[test]
    fn matches_iterative_reference(n in 0..=25u64) {
        prop_assert_eq!(fibonacci(n).unwrap(), fib_iterative(n));
    }

    #[test]
    fn evaluation_is_deterministic(n in 0..=25u64) {
        prop_assert_eq!(fibonacci(n), fibonacci(n));
    }

    #[test]
    fn oversized_inputs_error_without_recursing(n in 94u64..) {
        prop_assert!(fibonacci(n).is_err());
    }
}
