use thiserror::Error;

/// Errors that can occur while validating or parsing input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one value is required")]
    EmptyValues,
    #[error("A target value is required after the operands")]
    MissingTarget,
    #[error("Not a valid number: {0}")]
    InvalidNumber(String),
    #[error("Fraction has a zero denominator: {0}")]
    ZeroDenominator(String),
    #[error("Unknown postfix token: {0}")]
    UnknownToken(String),
}
