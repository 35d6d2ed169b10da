pub mod error;
pub mod factorial;
pub mod fib;
pub mod prime;

pub use error::MathError;
pub use factorial::{MAX_FACTORIAL_INPUT, factorial};
pub use fib::{MAX_FIB_INPUT, fibonacci};
pub use prime::is_prime;
