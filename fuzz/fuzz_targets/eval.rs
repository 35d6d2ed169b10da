#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mathfns::{MAX_FACTORIAL_INPUT, MAX_FIB_INPUT};

#[derive(Arbitrary, Debug)]
enum Call {
    Fib(u64),
    Factorial(u64),
}

fuzz_target!(|call: Call| {
    match call {
        Call::Fib(n) => {
            // Double recursion makes n > 30 too slow to evaluate here, but the
            // bound check past MAX_FIB_INPUT must still reject immediately.
            if n <= 30 {
                assert!(mathfns::fibonacci(n).is_ok());
            } else if n > MAX_FIB_INPUT {
                assert!(mathfns::fibonacci(n).is_err());
            }
        }
        Call::Factorial(n) => {
            let result = mathfns::factorial(n);
            if n <= MAX_FACTORIAL_INPUT {
                let product: u64 = (1..=n).product();
                assert_eq!(result, Ok(product));
            } else {
                assert!(result.is_err());
            }
        }
    }
});
