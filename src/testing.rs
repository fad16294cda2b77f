//! Test helpers: an independent infix evaluator with standard precedence

use num::{BigInt, Zero};

use crate::accumulator::Value;

struct InfixParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl InfixParser<'_> {
    fn skip_spaces(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn expression(&mut self) -> Option<Value> {
        let mut value = self.term()?;
        loop {
            self.skip_spaces();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    value += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => return Some(value),
            }
        }
    }

    fn term(&mut self) -> Option<Value> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.chars.peek() {
                Some('*') => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor.is_zero() {
                        return None;
                    }
                    value /= divisor;
                }
                _ => return Some(value),
            }
        }
    }

    fn factor(&mut self) -> Option<Value> {
        self.skip_spaces();
        match self.chars.peek()? {
            '(' => {
                self.chars.next();
                let value = self.expression()?;
                self.skip_spaces();
                (self.chars.next()? == ')').then_some(value)
            }
            '-' => {
                self.chars.next();
                Some(-self.factor()?)
            }
            _ => {
                let mut digits = String::new();
                while let Some(c) = self.chars.peek().filter(|c| c.is_ascii_digit()) {
                    digits.push(*c);
                    self.chars.next();
                }
                digits.parse::<BigInt>().ok().map(Value::from_integer)
            }
        }
    }
}

/// Evaluate an infix formula exactly, `None` if it does not parse
pub(crate) fn evaluate_infix(formula: &str) -> Option<Value> {
    let mut parser = InfixParser {
        chars: formula.chars().peekable(),
    };
    let value = parser.expression()?;
    parser.skip_spaces();
    parser.chars.next().is_none().then_some(value)
}

pub(crate) fn int(n: i64) -> Value {
    Value::from_integer(BigInt::from(n))
}

pub(crate) fn ratio(numer: i64, denom: i64) -> Value {
    Value::new(BigInt::from(numer), BigInt::from(denom))
}
