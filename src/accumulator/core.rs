use log::debug;

use crate::accumulator::errors::AccumulatorError;
use crate::accumulator::{Command, Operator, Value};

/// Postfix evaluator that records the expression it builds.
///
/// The operand stack holds exact values; the trace holds one display token per
/// pushed value and per applied operator, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    pub(crate) stack: Vec<Value>,
    pub(crate) trace: Vec<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all operands and trace tokens
    pub fn reset(&mut self) {
        self.stack.clear();
        self.trace.clear();
    }

    pub fn push_value(&mut self, value: Value) {
        self.trace.push(value.to_string());
        self.stack.push(value);
    }

    /// Apply `op` to the top two operands, the earlier push being the left one.
    ///
    /// Dividing by zero leaves both stacks untouched and still returns `Ok`:
    /// the surplus operand keeps `result()` absent for the rest of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulatorError::StackUnderflow`] when fewer than two operands
    /// are available for a real operator.
    pub fn apply_operator(&mut self, op: Operator) -> Result<(), AccumulatorError> {
        if op == Operator::Nop {
            return Ok(());
        }

        let depth = self.stack.len();
        let applied = match self.stack.as_slice() {
            [.., left, right] => op.apply(left, right),
            _ => {
                return Err(AccumulatorError::StackUnderflow {
                    operator: op,
                    depth,
                });
            }
        };

        let Some(value) = applied else {
            debug!("Division by zero at depth {}, skipping operator", depth);
            return Ok(());
        };

        self.stack.truncate(depth - 2);
        self.stack.push(value);
        self.trace.push(op.symbol().to_string());
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates [`AccumulatorError::StackUnderflow`] from operator commands.
    pub fn push(&mut self, command: Command) -> Result<(), AccumulatorError> {
        match command {
            Command::Push(value) => {
                self.push_value(value);
                Ok(())
            }
            Command::Apply(op) => self.apply_operator(op),
        }
    }

    /// Push every command of a stream in order.
    ///
    /// # Errors
    ///
    /// Stops at the first command that underflows the stack.
    pub fn run<I>(&mut self, commands: I) -> Result<(), AccumulatorError>
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.push(command)?;
        }
        Ok(())
    }

    /// The final value, present only when exactly one operand remains
    pub fn result(&self) -> Option<&Value> {
        match self.stack.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
