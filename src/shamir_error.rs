use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShamirError {
    #[error("Base {0} is invalid; it must be greater than 1")]
    InvalidBase(u32),
    #[error("Digit string is empty")]
    EmptyDigits,
    #[error("Character '{digit}' is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("Invalid threshold")]
    InvalidThreshold,
    #[error("Not enough shares; need {needed}, got {got}")]
    InsufficientShares { needed: usize, got: usize },
    #[error("Duplicate x-coordinate {0} among the selected shares")]
    DuplicateXCoordinate(u32),
    #[error("Interpolation did not reduce to an integer secret")]
    NonIntegerResult,
}
