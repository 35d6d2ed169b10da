use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("{function}({input}) does not fit in u64 (largest supported input is {max})")]
    Overflow { function: &'static str, input: u64, max: u64 },
}

impl MathError {
    pub fn overflow(function: &'static str, input: u64, max: u64) -> Self {
        Self::Overflow { function, input, max }
    }
}
