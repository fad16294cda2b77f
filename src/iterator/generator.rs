use crate::accumulator::{Command, Operator, Value};

use super::types::{Candidate, Shape};

fn push(value: &Value) -> Command {
    Command::Push(value.clone())
}

impl Shape {
    /// Lay `values` and `operators` out as a postfix command stream.
    ///
    /// Returns `None` when there are too few values for this shape or the
    /// operator count is not one less than the value count.
    pub fn commands(self, values: &[&Value], operators: &[Operator]) -> Option<Vec<Command>> {
        if values.is_empty() || operators.len() + 1 != values.len() {
            return None;
        }

        let mut out = Vec::with_capacity(values.len() + operators.len());
        match self {
            Shape::Type1 => {
                let (first, rest) = values.split_first()?;
                out.push(push(first));
                for (value, op) in rest.iter().zip(operators) {
                    out.push(push(value));
                    out.push(Command::Apply(*op));
                }
            }
            Shape::Type2Even | Shape::Type2Odd => {
                let ([v0, v1, rest @ ..], [op0, rest_ops @ ..]) = (values, operators) else {
                    return None;
                };
                out.extend([push(v0), push(v1), Command::Apply(*op0)]);

                let pairs = rest.chunks_exact(2);
                let op_pairs = rest_ops.chunks_exact(2);
                let (leftover, leftover_ops) = (pairs.remainder(), op_pairs.remainder());
                for (pair, op_pair) in pairs.zip(op_pairs) {
                    if let ([a, b], [first_op, second_op]) = (pair, op_pair) {
                        out.extend([
                            push(a),
                            push(b),
                            Command::Apply(*first_op),
                            Command::Apply(*second_op),
                        ]);
                    }
                }
                if let ([last], [last_op]) = (leftover, leftover_ops) {
                    out.extend([push(last), Command::Apply(*last_op)]);
                }
            }
            Shape::Type3 => {
                let ([v0, v1, v2, rest @ ..], [op0, op1, rest_ops @ ..]) = (values, operators)
                else {
                    return None;
                };
                out.extend([
                    push(v0),
                    push(v1),
                    push(v2),
                    Command::Apply(*op0),
                    Command::Apply(*op1),
                ]);
                for (value, op) in rest.iter().zip(rest_ops) {
                    out.push(push(value));
                    out.push(Command::Apply(*op));
                }
            }
        }
        Some(out)
    }
}

impl Candidate {
    /// The postfix command stream for this candidate over `values`
    pub fn commands(&self, values: &[Value]) -> Option<Vec<Command>> {
        let ordered = self
            .permutation
            .iter()
            .map(|&idx| values.get(idx))
            .collect::<Option<Vec<_>>>()?;
        self.shape.commands(&ordered, &self.operators)
    }
}
