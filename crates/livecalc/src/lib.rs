//! livecalc - live-preview calculator core
//!
//! A text field holds an arithmetic expression; every edit re-evaluates it
//! and refreshes the result. Evaluation failures never surface: an
//! incomplete expression such as `"3+"` keeps the last good result.
//!
//! - [`core`]: tokenizer, recursive descent parser, evaluator, number display
//! - [`state`]: observable values for front ends to subscribe to
//! - [`store`]: [`EquationStore`](store::EquationStore), equation and result
//! - [`controller`]: [`InputController`](controller::InputController),
//!   button presses applied at a cursor
//! - [`keypad`]: the standard button grid
//!
//! # Example
//!
//! ```rust
//! use livecalc::prelude::*;
//!
//! let mut calc = InputController::new();
//! for label in ["4", "2", "*", "2"] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.result(), "84");
//!
//! // Half-typed input keeps the previous result
//! calc.press("+").unwrap();
//! assert_eq!(calc.result(), "84");
//!
//! calc.press("=").unwrap();
//! assert_eq!(calc.text(), "84");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod controller;
pub mod core;
pub mod keypad;
pub mod state;
pub mod store;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{Button, InputController, Snapshot};
    pub use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
    pub use crate::core::format::NumberFormat;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::keypad::{Key, KeyClass, Keypad};
    pub use crate::state::{Observable, SubscriptionId};
    pub use crate::store::{EquationStore, StoreSubscription, DEFAULT_RESULT};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_controller_with_custom_store() {
        let store = EquationStore::new().with_format(NumberFormat::new().with_max_fraction_digits(3));
        let mut calc = InputController::with_store(store);
        for label in ["2", "/", "3"] {
            calc.press(label).unwrap();
        }
        assert_eq!(calc.result(), "0.667");
    }

    #[test]
    fn test_keypad_drives_controller() {
        let keypad = Keypad::standard();
        let mut calc = InputController::new();
        for label in ["(", "1", "+", "2", ")", "*", "3", "="] {
            let key = keypad.find(label).unwrap();
            calc.apply(&key.button);
        }
        assert_eq!(calc.text(), "9");
        assert_eq!(calc.result(), "9");
    }
}
