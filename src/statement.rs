use crate::environment::Environment;
use crate::error_handling::*;
use crate::evaluating::evaluate;

/// A line split into `name = expression;`, with the terminator removed.
#[derive(Debug, PartialEq)]
pub struct Statement<'a> {
    pub name: &'a str,
    pub expression: &'a str,
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Checks the shape of an assignment. Every check runs, so a line can be
/// rejected for several reasons at once.
pub fn split(line: &str) -> std::result::Result<Statement<'_>, Vec<CalcError>> {
    let Some((name, expression)) = line.split_once('=').filter(|(_, rest)| !rest.contains('=')) else {
        return Err(vec![CalcError::unsupported_statement(line.into())]);
    };
    let name = name.trim();
    let expression = expression.trim();

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(CalcError::improper(line, "missing variable name"));
    } else if name.contains(char::is_whitespace) {
        errors.push(CalcError::improper(line, "more than one variable name"));
    } else if !is_valid_name(name) {
        errors.push(CalcError::invalid_variable_name(line.into()));
    }

    let terminated = expression.strip_suffix(';');
    if terminated.is_none() {
        errors.push(CalcError::improper(expression, "missing semicolon"));
    }

    match terminated {
        Some(expression) if errors.is_empty() => Ok(Statement{name, expression}),
        _ => Err(errors),
    }
}

/// Runs one assignment line. The environment is only written when the
/// line is well formed and its expression evaluates.
pub fn execute(line: &str, variables: &mut Environment) -> std::result::Result<f64, Vec<CalcError>> {
    let statement = split(line)?;
    let value = evaluate(statement.expression, variables).map_err(|e| vec![e])?;
    tracing::debug!(name = statement.name, value, "assigned");
    variables.set(statement.name, value);
    Ok(value)
}
