use log::debug;

use crate::accumulator::Operator;

use super::permutations::{OperatorTuples, Permutations};
use super::state::CandidateState;
use super::types::{Candidate, Shape};

/// Lazily yields every candidate in search order: for each ordering of the
/// values, every shape in turn, and for each shape every operator tuple.
#[derive(Debug, Clone)]
pub struct CandidateIterator {
    permutations: Permutations,
    shapes: Vec<Shape>,
    operator_tuples: Vec<Vec<Operator>>,
    state: CandidateState,
}

impl CandidateIterator {
    pub fn new(value_count: usize) -> Self {
        Self::with_permutations(value_count, Permutations::new(value_count))
    }

    /// Candidates for a single ordering of the values
    pub fn for_permutation(permutation: Vec<usize>) -> Self {
        let value_count = permutation.len();
        Self::with_permutations(value_count, Permutations::single(permutation))
    }

    fn with_permutations(value_count: usize, permutations: Permutations) -> Self {
        let shapes = Shape::applicable(value_count);
        let operator_tuples: Vec<_> = OperatorTuples::new(value_count.saturating_sub(1)).collect();

        debug!(
            "Candidate iterator over {} values: {} shapes, {} operator tuples per shape",
            value_count,
            shapes.len(),
            operator_tuples.len()
        );

        Self {
            permutations,
            shapes,
            operator_tuples,
            state: CandidateState::new(),
        }
    }
}

impl Iterator for CandidateIterator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state.permutation.is_none() {
                let permutation = self.permutations.next()?;
                self.state.start(permutation);
            }

            let Some(&shape) = self.shapes.get(self.state.shape_idx) else {
                self.state.finish_permutation();
                continue;
            };

            let Some(operators) = self.operator_tuples.get(self.state.tuple_idx) else {
                self.state.next_shape();
                continue;
            };

            let Some(permutation) = self.state.permutation.clone() else {
                continue;
            };
            let candidate = Candidate {
                permutation,
                operators: operators.clone(),
                shape,
            };
            self.state.advance();
            return Some(candidate);
        }
    }
}
