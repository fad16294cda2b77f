use std::fmt;

use crate::accumulator::{Accumulator, Value};
use crate::iterator::Shape;
use crate::solver::errors::SolverError;
use crate::utils::parse_postfix;

/// An expression that reached the target, with the shape that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub shape: Shape,
    pub postfix: String,
    pub infix: String,
    pub value: Value,
}

impl Solution {
    pub(crate) fn from_accumulator(
        shape: Shape,
        acc: &Accumulator,
        value: Value,
    ) -> Result<Self, SolverError> {
        Ok(Self {
            shape,
            postfix: acc.postfix_formula(),
            infix: acc.infix_formula()?,
            value,
        })
    }

    pub fn tag(&self) -> &'static str {
        self.shape.tag()
    }

    /// Re-run the postfix formula through a fresh accumulator.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula does not parse or underflows the stack.
    pub fn replay(&self) -> Result<Option<Value>, SolverError> {
        let commands = parse_postfix(&self.postfix)?;
        let mut acc = Accumulator::new();
        acc.run(commands)?;
        Ok(acc.result().cloned())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "RESULT {}:    {}", self.tag(), self.postfix)?;
        write!(f, "RESULT {}:    {}", self.tag(), self.infix)
    }
}
