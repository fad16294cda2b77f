use crate::accumulator::Operator;

/// Permutations of `0..len` in lexicographic order.
///
/// Positions are permuted rather than values, so repeated values still yield
/// repeated orderings.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
    single: bool,
}

impl Permutations {
    pub fn new(len: usize) -> Self {
        Self {
            current: Some((0..len).collect()),
            single: false,
        }
    }

    /// Yield exactly one given ordering
    pub fn single(permutation: Vec<usize>) -> Self {
        Self {
            current: Some(permutation),
            single: true,
        }
    }
}

/// Next ordering in lexicographic order, `None` after the last one
fn next_permutation(permutation: &[usize]) -> Option<Vec<usize>> {
    let mut next = permutation.to_vec();
    let pivot = next
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))?;
    let pivot_value = *next.get(pivot)?;
    let successor = next.iter().rposition(|&value| value > pivot_value)?;

    next.swap(pivot, successor);
    next.get_mut(pivot + 1..)?.reverse();
    Some(next)
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if !self.single {
            self.current = next_permutation(&current);
        }
        Some(current)
    }
}

/// Every tuple of arithmetic operators over `slots` positions, the rightmost
/// position varying fastest.
#[derive(Debug, Clone)]
pub struct OperatorTuples {
    digits: Option<Vec<usize>>,
}

impl OperatorTuples {
    pub fn new(slots: usize) -> Self {
        Self {
            digits: Some(vec![0; slots]),
        }
    }
}

impl Iterator for OperatorTuples {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        let digits = self.digits.take()?;
        let tuple = digits
            .iter()
            .filter_map(|&digit| Operator::ARITHMETIC.get(digit).copied())
            .collect();

        let mut next = digits;
        let mut carried = true;
        for digit in next.iter_mut().rev() {
            *digit += 1;
            if *digit < Operator::ARITHMETIC.len() {
                carried = false;
                break;
            }
            *digit = 0;
        }
        if !carried {
            self.digits = Some(next);
        }

        Some(tuple)
    }
}
