use crate::accumulator::Accumulator;
use crate::accumulator::Operator;
use crate::accumulator::errors::AccumulatorError;

/// How an infix fragment was built, which decides where parentheses go
#[derive(Debug, Clone, Copy, PartialEq)]
enum FragmentKind {
    Leaf,
    /// `(a + b)` or `(a - b)`, already closed by parentheses
    Grouped,
    /// `a * b` or `a / b`, left bare
    Product,
}

#[derive(Debug)]
struct Fragment {
    text: String,
    kind: FragmentKind,
}

impl Fragment {
    fn leaf(token: &str) -> Self {
        // Negative and fractional literals would otherwise bind to neighbours.
        let text = if token.starts_with('-') || token.contains('/') {
            format!("({})", token)
        } else {
            token.to_string()
        };
        Self {
            text,
            kind: FragmentKind::Leaf,
        }
    }

    fn combine(left: Fragment, op: Operator, right: Fragment) -> Self {
        if op.is_additive() {
            return Self {
                text: format!("({} {} {})", left.text, op.symbol(), right.text),
                kind: FragmentKind::Grouped,
            };
        }

        let right_text = if op == Operator::Div && right.kind == FragmentKind::Product {
            format!("({})", right.text)
        } else {
            right.text
        };
        Self {
            text: format!("{} {} {}", left.text, op.symbol(), right_text),
            kind: FragmentKind::Product,
        }
    }
}

impl Accumulator {
    /// The trace tokens joined by single spaces
    pub fn postfix_formula(&self) -> String {
        self.trace.join(" ")
    }

    /// Re-fold the trace into an infix string.
    ///
    /// Sums and differences are always parenthesized, products and quotients
    /// are not, except for a product on the right of `/`.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulatorError::MalformedTrace`] if the trace does not fold
    /// into exactly one fragment.
    pub fn infix_formula(&self) -> Result<String, AccumulatorError> {
        let mut fragments: Vec<Fragment> = Vec::with_capacity(self.trace.len());

        for token in &self.trace {
            match Operator::from_symbol(token) {
                Some(op) => {
                    let (Some(right), Some(left)) = (fragments.pop(), fragments.pop()) else {
                        return Err(AccumulatorError::MalformedTrace {
                            fragments: fragments.len(),
                        });
                    };
                    fragments.push(Fragment::combine(left, op, right));
                }
                None => fragments.push(Fragment::leaf(token)),
            }
        }

        match fragments.pop() {
            Some(fragment) if fragments.is_empty() => Ok(fragment.text),
            Some(_) => Err(AccumulatorError::MalformedTrace {
                fragments: fragments.len() + 1,
            }),
            None => Err(AccumulatorError::MalformedTrace { fragments: 0 }),
        }
    }
}
