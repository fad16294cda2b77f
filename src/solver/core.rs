use log::{debug, info, warn};
use rayon::prelude::*;

use crate::accumulator::{Accumulator, Value};
use crate::iterator::{Candidate, CandidateIterator, Permutations};
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;
use crate::utils::validate_values;

/// Configuration for the search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Spread orderings over the rayon pool; the first match in search order
    /// still wins.
    pub parallel: bool,
}

/// Counters collected while walking candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub evaluated: usize,
    pub dead_ends: usize,
}

impl SearchStats {
    fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            evaluated: self.evaluated + other.evaluated,
            dead_ends: self.dead_ends + other.dead_ends,
        }
    }
}

/// Main solver for finding expressions that match a target value
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the first expression over `values` that evaluates to `target`.
    ///
    /// Returns `Ok(None)` once every candidate has been tried without a match.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty, or if a generated command stream
    /// underflows the accumulator.
    pub fn find_solution(
        &self,
        target: &Value,
        values: &[Value],
    ) -> Result<Option<Solution>, SolverError> {
        validate_values(values)?;

        info!(
            "Searching for {} using {} values ({})",
            target,
            values.len(),
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let found = if self.config.parallel {
            self.search_parallel(target, values)?
        } else {
            let (found, stats) =
                self.search_candidates(CandidateIterator::new(values.len()), target, values)?;
            info!(
                "Evaluated {} candidates ({} dead ends)",
                stats.evaluated, stats.dead_ends
            );
            found
        };

        match &found {
            Some(solution) => info!("Found {} solution: {}", solution.tag(), solution.infix),
            None => info!("No candidate reached {}", target),
        }
        Ok(found)
    }

    fn search_parallel(
        &self,
        target: &Value,
        values: &[Value],
    ) -> Result<Option<Solution>, SolverError> {
        let permutations: Vec<Vec<usize>> = Permutations::new(values.len()).collect();
        debug!("Distributing {} orderings", permutations.len());

        permutations
            .into_par_iter()
            .map(|permutation| {
                self.search_candidates(
                    CandidateIterator::for_permutation(permutation),
                    target,
                    values,
                )
            })
            .find_map_first(|outcome| match outcome {
                Ok((Some(solution), _)) => Some(Ok(solution)),
                Ok((None, _)) => None,
                Err(err) => Some(Err(err)),
            })
            .transpose()
    }

    fn search_candidates(
        &self,
        candidates: CandidateIterator,
        target: &Value,
        values: &[Value],
    ) -> Result<(Option<Solution>, SearchStats), SolverError> {
        let mut stats = SearchStats::default();

        for candidate in candidates {
            let (found, step) = self.evaluate(&candidate, target, values)?;
            stats = stats.merge(step);
            if found.is_some() {
                return Ok((found, stats));
            }
        }

        Ok((None, stats))
    }

    /// Drive one candidate through a fresh accumulator
    fn evaluate(
        &self,
        candidate: &Candidate,
        target: &Value,
        values: &[Value],
    ) -> Result<(Option<Solution>, SearchStats), SolverError> {
        let Some(commands) = candidate.commands(values) else {
            warn!("Skipping candidate that does not fit its shape: {:?}", candidate);
            return Ok((None, SearchStats::default()));
        };

        let mut acc = Accumulator::new();
        acc.run(commands)?;

        let mut stats = SearchStats {
            evaluated: 1,
            dead_ends: 0,
        };
        match acc.result() {
            Some(value) if value == target => {
                let solution = Solution::from_accumulator(candidate.shape, &acc, value.clone())?;
                Ok((Some(solution), stats))
            }
            Some(_) => Ok((None, stats)),
            None => {
                stats.dead_ends = 1;
                Ok((None, stats))
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
