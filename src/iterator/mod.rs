pub mod core;
pub mod generator;
pub mod permutations;
pub mod state;
pub mod types;

pub use self::core::CandidateIterator;
pub use permutations::{OperatorTuples, Permutations};
pub use types::{Candidate, Shape};
