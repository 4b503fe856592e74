//! Equation and result state with live re-evaluation
//!
//! Every equation change is evaluated immediately. A failed evaluation is
//! not an error for the caller: a half-typed `"3+"` simply leaves the last
//! good result on display.

use tracing::{debug, trace};

use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
use crate::core::format::NumberFormat;
use crate::core::CalcResult;
use crate::state::{Observable, SubscriptionId};

/// Result shown for an empty equation and after all-clear
pub const DEFAULT_RESULT: &str = "0";

/// Handle for a store subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSubscription {
    /// Subscribed to the equation
    Equation(SubscriptionId),
    /// Subscribed to the result
    Result(SubscriptionId),
}

/// Holds the equation text and its live result
#[derive(Debug)]
pub struct EquationStore<E = Evaluator> {
    equation: Observable<String>,
    result: Observable<String>,
    evaluator: E,
    format: NumberFormat,
}

impl Default for EquationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationStore {
    /// Creates a store backed by the built-in evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }
}

impl<E: ExpressionEvaluator> EquationStore<E> {
    /// Creates a store backed by a custom evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            equation: Observable::new(String::new()),
            result: Observable::new(DEFAULT_RESULT.to_string()),
            evaluator,
            format: NumberFormat::default(),
        }
    }

    /// Sets the number display policy
    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Current equation text
    #[must_use]
    pub fn equation(&self) -> &str {
        self.equation.get()
    }

    /// Current result text
    #[must_use]
    pub fn result(&self) -> &str {
        self.result.get()
    }

    /// Display policy in use
    #[must_use]
    pub const fn format(&self) -> NumberFormat {
        self.format
    }

    /// Replaces the equation and re-evaluates it
    ///
    /// On success the result is replaced; on failure the previous result
    /// is kept. Half-typed input is logged at trace level, malformed input
    /// at debug level.
    pub fn set_equation(&mut self, text: impl Into<String>) {
        self.equation.set(text.into());

        match self.evaluate(self.equation.get()) {
            Ok(shown) => {
                trace!(equation = self.equation.get().as_str(), result = %shown, "evaluated");
                self.result.set(shown);
            }
            Err(err) if err.is_incomplete() => {
                trace!(
                    equation = self.equation.get().as_str(),
                    kept = self.result.get().as_str(),
                    "incomplete equation, keeping previous result"
                );
            }
            Err(err) => {
                debug!(
                    equation = self.equation.get().as_str(),
                    error = %err,
                    kept = self.result.get().as_str(),
                    "evaluation failed, keeping previous result"
                );
            }
        }
    }

    /// Overrides the result without evaluating anything
    pub fn set_result(&mut self, text: impl Into<String>) {
        self.result.set(text.into());
    }

    /// Evaluates `text` to its display string
    ///
    /// Blank text evaluates to [`DEFAULT_RESULT`] without consulting the
    /// evaluator.
    pub fn evaluate(&self, text: &str) -> CalcResult<String> {
        if text.trim().is_empty() {
            return Ok(DEFAULT_RESULT.to_string());
        }
        let value = self.evaluator.evaluate_expression(text)?;
        Ok(self.format.format(value))
    }

    /// Calls `callback` with the new equation on every change
    pub fn subscribe_equation(
        &mut self,
        callback: impl FnMut(&String) + 'static,
    ) -> StoreSubscription {
        StoreSubscription::Equation(self.equation.subscribe(callback))
    }

    /// Calls `callback` with the new result on every change
    pub fn subscribe_result(
        &mut self,
        callback: impl FnMut(&String) + 'static,
    ) -> StoreSubscription {
        StoreSubscription::Result(self.result.subscribe(callback))
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: StoreSubscription) -> bool {
        match subscription {
            StoreSubscription::Equation(id) => self.equation.unsubscribe(id),
            StoreSubscription::Result(id) => self.result.unsubscribe(id),
        }
    }
}
