//! Postfix accumulator split into submodules for clarity

mod core;
mod errors;
mod formula;
mod operator;

pub use self::core::Accumulator;
pub use errors::AccumulatorError;
pub use operator::{Command, Operator};

/// Exact rational value used for every operand and result
pub type Value = num::BigRational;
