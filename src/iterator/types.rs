use std::fmt;

use crate::accumulator::Operator;

/// Bracketing strategy used to lay values and operators out in postfix order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `v0 v1 op0 v2 op1 ...`: strict left fold
    Type1,
    /// `v0 v1 op0`, then `v[i] v[i+1] op[i-1] op[i]` for each following pair
    Type2Even,
    /// Pairwise like [`Shape::Type2Even`], then the last value with the last operator
    Type2Odd,
    /// `v0 v1 v2 op0 op1`, then one value and one operator at a time
    Type3,
}

impl Shape {
    pub fn tag(self) -> &'static str {
        match self {
            Shape::Type1 => "TYPE1",
            Shape::Type2Even => "TYPE2-1",
            Shape::Type2Odd => "TYPE2-2",
            Shape::Type3 => "TYPE3",
        }
    }

    /// Shapes tried for `count` values, in search order
    pub fn applicable(count: usize) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(3);
        if count >= 1 {
            shapes.push(Shape::Type1);
        }
        if count >= 2 {
            shapes.push(if count % 2 == 0 {
                Shape::Type2Even
            } else {
                Shape::Type2Odd
            });
        }
        if count >= 3 {
            shapes.push(Shape::Type3);
        }
        shapes
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One (ordering, operator tuple, shape) triple to evaluate
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub permutation: Vec<usize>,
    pub operators: Vec<Operator>,
    pub shape: Shape,
}
