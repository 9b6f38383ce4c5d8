use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("improper syntax in expression '{0}', did not expect an operand here")]
    unexpected_operand(String),

    #[error("improper syntax in expression '{0}', did not expect an operator here")]
    unexpected_operator(String),

    #[error("'{0}' contains multiple decimal points")]
    multiple_decimal_points(String),

    #[error("'{0}' contains an invalid variable name")]
    invalid_variable_name(String),

    #[error("variable '{0}' is undefined")]
    undefined_variable(String),

    #[error("division by 0")]
    division_by_zero,

    #[error("improper syntax in expression '{expression}', {reason}")]
    invalid_syntax { expression: String, reason: String },

    #[error("'{0}' is an unsupported statement")]
    unsupported_statement(String),

    #[error("'{statement}' contains improper syntax, {reason}")]
    improper_syntax { statement: String, reason: String },
}

impl CalcError {
    pub fn syntax(expression: &str, reason: impl Into<String>) -> Self {
        Self::invalid_syntax {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    pub fn improper(statement: &str, reason: impl Into<String>) -> Self {
        Self::improper_syntax {
            statement: statement.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
