use log::{debug, warn};
use num::{BigInt, Zero};

use crate::accumulator::{Command, Operator, Value};
use crate::utils::errors::UtilsError;

/// Operands and target read from a token list
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub values: Vec<Value>,
    pub target: Value,
}

fn parse_integer(token: &str, full_token: &str) -> Result<BigInt, UtilsError> {
    token
        .parse::<BigInt>()
        .map_err(|_| UtilsError::InvalidNumber(full_token.to_string()))
}

fn parse_decimal(token: &str) -> Result<Value, UtilsError> {
    let invalid = || UtilsError::InvalidNumber(token.to_string());

    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (whole, fraction) = unsigned.split_once('.').ok_or_else(invalid)?;

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let magnitude = parse_integer(&format!("{whole}{fraction}"), token)?;
    let numer = if negative { -magnitude } else { magnitude };
    let denom = num::pow(BigInt::from(10), fraction.len());
    Ok(Value::new(numer, denom))
}

/// Parse a single numeric token into an exact rational.
///
/// Accepts integers (`12`, `-3`), fractions (`3/4`, `-1/7`) and finite
/// decimals (`1.5`, `-.25`).
///
/// # Errors
///
/// Returns an error if the token is not a number or a fraction has a zero
/// denominator.
pub fn parse_value(token: &str) -> Result<Value, UtilsError> {
    let token = token.trim();
    debug!("Parsing value token '{}'", token);

    if let Some((numer, denom)) = token.split_once('/') {
        let numer = parse_integer(numer.trim(), token)?;
        let denom = parse_integer(denom.trim(), token)?;
        if denom.is_zero() {
            warn!("Rejecting fraction with zero denominator: '{}'", token);
            return Err(UtilsError::ZeroDenominator(token.to_string()));
        }
        return Ok(Value::new(numer, denom));
    }

    if token.contains('.') {
        return parse_decimal(token);
    }

    parse_integer(token, token).map(Value::from_integer)
}

/// Split a token list into operands and target, the target being the last
/// token.
///
/// # Errors
///
/// Returns an error if there are no tokens, no operands before the target, or
/// any token fails to parse.
pub fn parse_problem<S: AsRef<str>>(tokens: &[S]) -> Result<Problem, UtilsError> {
    let (target, operands) = tokens.split_last().ok_or(UtilsError::MissingTarget)?;

    if operands.is_empty() {
        warn!("Only a target was given, no operands");
        return Err(UtilsError::EmptyValues);
    }

    let values = operands
        .iter()
        .map(|token| parse_value(token.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let target = parse_value(target.as_ref())?;

    debug!("Parsed {} operands and target {}", values.len(), target);
    Ok(Problem { values, target })
}

/// Parse a space-separated postfix formula back into a command stream.
///
/// # Errors
///
/// Returns an error for any token that is neither an operator symbol nor a
/// number.
pub fn parse_postfix(formula: &str) -> Result<Vec<Command>, UtilsError> {
    formula
        .split_whitespace()
        .map(|token| {
            if let Some(op) = Operator::from_symbol(token) {
                return Ok(Command::Apply(op));
            }
            parse_value(token)
                .map(Command::Push)
                .map_err(|_| UtilsError::UnknownToken(token.to_string()))
        })
        .collect()
}
