use thiserror::Error;

use crate::accumulator::AccumulatorError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Accumulator error: {0}")]
    Accumulator(#[from] AccumulatorError),
    #[error("Input error: {0}")]
    Utils(#[from] UtilsError),
}
