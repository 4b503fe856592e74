//! Arithmetic core: tokenizer, parser, evaluator and display formatting
//!
//! Nothing in here knows about cursors or buttons. The store and the
//! controller build on top of it.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Expression stopped where an operand was expected
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    /// Division or remainder by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is NaN or infinite
    #[error("Result is not a finite number")]
    NonFinite,
    /// Parentheses or unary operators nested past the parser limit
    #[error("Expression nested too deeply")]
    TooDeep,
    /// Button label that maps to no action
    #[error("Invalid button: {0:?}")]
    InvalidButton(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true for errors a half-typed expression produces
    ///
    /// `"3+"` and `"(2"` are incomplete, not wrong: typing more may fix them.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::UnexpectedEnd | Self::EmptyExpression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_parse() {
        let err = CalcError::parse("unexpected token");
        assert_eq!(err.to_string(), "Invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_invalid_button() {
        let err = CalcError::InvalidButton(String::new());
        assert_eq!(err.to_string(), "Invalid button: \"\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::NonFinite);
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_is_incomplete() {
        assert!(CalcError::UnexpectedEnd.is_incomplete());
        assert!(CalcError::EmptyExpression.is_incomplete());
        assert!(!CalcError::DivisionByZero.is_incomplete());
        assert!(!CalcError::parse("x").is_incomplete());
    }
}
