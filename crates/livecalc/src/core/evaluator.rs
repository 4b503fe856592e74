//! AST evaluator and the evaluator boundary used by the store

use crate::core::operations::check_finite;
use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Anything that turns an expression string into a number
///
/// [`crate::store::EquationStore`] only depends on this trait, so a
/// different arithmetic engine can be dropped in as long as it fails on
/// malformed input instead of guessing.
pub trait ExpressionEvaluator {
    /// Evaluates `expression`, failing on malformed input
    fn evaluate_expression(&self, expression: &str) -> CalcResult<f64>;
}

/// Built-in evaluator for `+ - * / %`, parentheses and decimal literals
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => check_finite(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

impl ExpressionEvaluator for Evaluator {
    fn evaluate_expression(&self, expression: &str) -> CalcResult<f64> {
        self.evaluate_str(expression)
    }
}
