use num::BigInt;

use crate::accumulator::{Command, Operator};
use crate::testing::ratio;
use crate::utils::{UtilsError, parse_postfix, parse_problem, parse_value, validate_values};

#[test]
fn test_parse_value_integer() {
    let result = parse_value("24");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, ratio(24, 1));
    }

    assert_eq!(parse_value("-3"), Ok(ratio(-3, 1)));
    assert_eq!(parse_value(" 7 "), Ok(ratio(7, 1)));
}

#[test]
fn test_parse_value_fraction_is_reduced() {
    let result = parse_value("6/8");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, ratio(3, 4));
        assert_eq!(value.numer(), &BigInt::from(3));
        assert_eq!(value.denom(), &BigInt::from(4));
    }

    assert_eq!(parse_value("-1/7"), Ok(ratio(-1, 7)));
}

#[test]
fn test_parse_value_decimal() {
    assert_eq!(parse_value("1.5"), Ok(ratio(3, 2)));
    assert_eq!(parse_value("-.25"), Ok(ratio(-1, 4)));
    assert_eq!(parse_value("2."), Ok(ratio(2, 1)));
    assert_eq!(parse_value("0.1"), Ok(ratio(1, 10)));
}

#[test]
fn test_parse_value_invalid() {
    assert!(matches!(
        parse_value("abc"),
        Err(UtilsError::InvalidNumber(_))
    ));
    assert!(matches!(parse_value(""), Err(UtilsError::InvalidNumber(_))));
    assert!(matches!(parse_value("."), Err(UtilsError::InvalidNumber(_))));
    assert!(matches!(
        parse_value("1.2.3"),
        Err(UtilsError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_value("1/x"),
        Err(UtilsError::InvalidNumber(_))
    ));
}

#[test]
fn test_parse_value_zero_denominator() {
    assert_eq!(
        parse_value("3/0"),
        Err(UtilsError::ZeroDenominator("3/0".to_string()))
    );
}

#[test]
fn test_parse_problem_last_token_is_target() {
    let result = parse_problem(&["4", "4", "4", "4", "24"]);
    assert!(result.is_ok());
    if let Ok(problem) = result {
        assert_eq!(problem.values, vec![ratio(4, 1); 4]);
        assert_eq!(problem.target, ratio(24, 1));
    }
}

#[test]
fn test_parse_problem_errors() {
    let empty: [&str; 0] = [];
    assert_eq!(parse_problem(&empty), Err(UtilsError::MissingTarget));
    assert_eq!(parse_problem(&["10"]), Err(UtilsError::EmptyValues));
    assert!(parse_problem(&["1", "two", "3"]).is_err());
}

#[test]
fn test_parse_postfix() {
    let result = parse_postfix("1/3 3 * -2 -");
    assert!(result.is_ok());
    if let Ok(commands) = result {
        assert_eq!(
            commands,
            vec![
                Command::Push(ratio(1, 3)),
                Command::Push(ratio(3, 1)),
                Command::Apply(Operator::Mul),
                Command::Push(ratio(-2, 1)),
                Command::Apply(Operator::Sub),
            ]
        );
    }
}

#[test]
fn test_parse_postfix_unknown_token() {
    assert_eq!(
        parse_postfix("1 2 ^"),
        Err(UtilsError::UnknownToken("^".to_string()))
    );
}

#[test]
fn test_validate_values() {
    assert!(validate_values(&[ratio(1, 1)]).is_ok());
    assert_eq!(validate_values(&[]), Err(UtilsError::EmptyValues));
}
