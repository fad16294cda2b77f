//! rpnsolve - find an arithmetic expression over a set of numbers that reaches a target
//!
//! Candidates are built in postfix form from every ordering of the input values,
//! every combination of `+ - * /`, and three bracketing shapes. They are
//! evaluated with exact rational arithmetic, and the first one that hits the
//! target is reported in postfix and infix form.

pub mod accumulator;
pub mod iterator;
pub mod solver;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export the main public API
pub use accumulator::{Accumulator, AccumulatorError, Command, Operator, Value};
pub use iterator::Shape;
pub use solver::{Solution, Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_postfix, parse_problem, parse_value};

/// Find an expression over `values` that evaluates to `target`
///
/// This is a convenience function that runs a default (sequential) solver.
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If a matching expression is found
/// * `Ok(None)` - If every candidate was tried without a match
/// * `Err(SolverError)` - If the input is empty
///
/// # Errors
///
/// This function will return an error if `values` is empty.
///
/// # Examples
///
/// ```
/// use rpnsolve::{parse_value, search};
///
/// let values = ["4", "4", "4", "4"]
///     .iter()
///     .map(|token| parse_value(token))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let target = parse_value("24").unwrap();
///
/// match search(&target, &values) {
///     Ok(Some(solution)) => println!("{}", solution),
///     Ok(None) => println!("Case Failed"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(target: &Value, values: &[Value]) -> Result<Option<Solution>, SolverError> {
    Solver::default().find_solution(target, values)
}
