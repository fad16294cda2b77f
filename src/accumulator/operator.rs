use std::fmt;

use num::Zero;

use crate::accumulator::Value;

/// Binary operators understood by the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Inert sentinel, never produced by candidate generation
    Nop,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The four real operators, in enumeration order
    pub const ARITHMETIC: [Operator; 4] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Nop => "",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Compute `left op right` exactly.
    ///
    /// Returns `None` for `Nop` and for division by zero.
    pub fn apply(self, left: &Value, right: &Value) -> Option<Value> {
        match self {
            Operator::Nop => None,
            Operator::Add => Some(left + right),
            Operator::Sub => Some(left - right),
            Operator::Mul => Some(left * right),
            Operator::Div if right.is_zero() => None,
            Operator::Div => Some(left / right),
        }
    }

    /// Whether the infix rendering wraps this operator's result in parentheses
    pub(crate) fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operator::Nop => write!(f, "nop"),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

/// One step of a postfix command stream
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Push(Value),
    Apply(Operator),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Push(value) => write!(f, "{}", value),
            Command::Apply(op) => write!(f, "{}", op),
        }
    }
}
