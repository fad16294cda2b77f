//! Input validation and token parsing

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::{Problem, parse_postfix, parse_problem, parse_value};
pub use validation::validate_values;

#[cfg(test)]
mod tests;
