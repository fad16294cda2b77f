mod core;
mod errors;
mod solution;

pub use self::core::{SearchStats, Solver, SolverConfig};
pub use errors::SolverError;
pub use solution::Solution;
