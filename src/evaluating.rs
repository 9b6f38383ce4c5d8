use crate::environment::Environment;
use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

/// Evaluates `expression` (without its terminating `;`) against `variables`.
///
/// Scanning and stack resolution run interleaved in a single left-to-right
/// pass; the first error met stops the evaluation.
pub fn evaluate(expression: &str, variables: &Environment) -> Result<f64> {
    let mut source = StringScanner::new(expression);
    evaluate_from(&mut source, expression, variables)
}

pub fn evaluate_from<S: Scanner>(source: &mut S, expression: &str, variables: &Environment) -> Result<f64> {
    let mut yard = Yard::new(expression, variables);
    while let Some(token) = source.next_token()? {
        yard.handle(token)?;
    }
    yard.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(expression: &str) -> Result<f64> {
        evaluate(expression, &Environment::new())
    }

    #[test]
    fn precedence_and_parens() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval("((1 + 2) * (3 + 4)) / 7"), Ok(3.0));
        assert_eq!(eval("7 - 2 - 1"), Ok(4.0));
        assert_eq!(eval("1.5 * 2"), Ok(3.0));
    }

    #[test]
    fn unary_minus_composes() {
        assert_eq!(eval("5 - -3"), Ok(8.0));
        assert_eq!(eval("5 - - -3"), Ok(2.0));
        assert_eq!(eval("-(2+3)"), Ok(-5.0));
        assert_eq!(eval("--4"), Ok(4.0));
        assert_eq!(eval("2 * (-3)"), Ok(-6.0));
        assert_eq!(eval("-2 * -3"), Ok(6.0));
    }

    #[test]
    fn unary_minus_applies_to_the_whole_group() {
        assert_eq!(eval("-(1-4)"), Ok(3.0));
        assert_eq!(eval("--(2+3)"), Ok(5.0));
        assert_eq!(eval("- - -(2+3)"), Ok(-5.0));
        assert_eq!(eval("2 * -(3 + 1) + 1"), Ok(-7.0));
        assert_eq!(eval("-(-(2) - 3)"), Ok(5.0));
        assert_eq!(eval("(-(1+1))"), Ok(-2.0));
    }

    #[test]
    fn variables_are_read_from_the_environment() {
        let mut variables = Environment::new();
        assert_eq!(
            evaluate("y + 1", &variables),
            Err(CalcError::undefined_variable("y".into()))
        );
        variables.set("y", 2.0);
        assert_eq!(evaluate("y + 1", &variables), Ok(3.0));
        assert_eq!(evaluate("-y * y", &variables), Ok(-4.0));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(eval("4 / 0"), Err(CalcError::division_by_zero));
        assert_eq!(eval("4 / (1 - 1)"), Err(CalcError::division_by_zero));
    }

    #[test]
    fn adjacent_operands_fail() {
        assert_eq!(eval("2 3"), Err(CalcError::unexpected_operand("2 3".into())));
        let mut variables = Environment::new();
        variables.set("x", 1.0);
        variables.set("y", 1.0);
        assert_eq!(
            evaluate("x y", &variables),
            Err(CalcError::unexpected_operand("x y".into()))
        );
        assert_eq!(eval("2 (3)"), Err(CalcError::unexpected_operand("2 (3)".into())));
    }

    #[test]
    fn misplaced_operand_wins_over_its_shape() {
        assert_eq!(eval("2 1.2.3"), Err(CalcError::unexpected_operand("2 1.2.3".into())));
        assert_eq!(eval("2x"), Err(CalcError::unexpected_operand("2x".into())));
        assert_eq!(eval("1.5y + 1"), Err(CalcError::unexpected_operand("1.5y + 1".into())));
    }

    #[test]
    fn misplaced_operators_fail() {
        assert_eq!(eval("* 2"), Err(CalcError::unexpected_operator("* 2".into())));
        assert_eq!(eval("2 + * 3"), Err(CalcError::unexpected_operator("2 + * 3".into())));
        assert_eq!(eval("()"), Err(CalcError::unexpected_operator("()".into())));
    }

    #[test]
    fn first_error_wins() {
        assert_eq!(eval("2 3 $"), Err(CalcError::unexpected_operand("2 3 $".into())));
        assert_eq!(eval("1 / 0 + 1.2.3"), Err(CalcError::division_by_zero));
        assert_eq!(eval("1 + 1.2.3 / 0"), Err(CalcError::multiple_decimal_points("1.2.3".into())));
        assert_eq!(
            eval("1.2.3 + 1"),
            Err(CalcError::multiple_decimal_points("1.2.3".into()))
        );
    }

    #[test]
    fn malformed_endings() {
        assert_eq!(eval(""), Err(CalcError::syntax("", "expression is empty")));
        assert_eq!(eval("-"), Err(CalcError::syntax("-", "expression ended abruptly")));
        assert_eq!(eval("(1 + 2"), Err(CalcError::syntax("(1 + 2", "could not find matching ')'")));
        assert_eq!(eval("1 + 2)"), Err(CalcError::syntax("1 + 2)", "could not find matching '('")));
        assert_eq!(eval("2;3"), Err(CalcError::syntax("2;3", "unrecognized character ';'")));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(eval("2+3"), eval("  2  +  3  "));
        assert_eq!(eval("\t(1+\t2)*3"), Ok(9.0));
    }
}
