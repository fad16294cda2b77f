use thiserror::Error;

use crate::accumulator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccumulatorError {
    #[error("Operator '{operator}' needs two operands but the stack holds {depth}")]
    StackUnderflow { operator: Operator, depth: usize },
    #[error("Trace does not reduce to a single formula ({fragments} fragments left)")]
    MalformedTrace { fragments: usize },
}
