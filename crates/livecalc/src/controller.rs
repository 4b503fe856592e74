//! Button presses applied to the equation text at a cursor
//!
//! The controller owns the editable field (text plus cursor) and forwards
//! every edit to the [`EquationStore`]. Cursor positions count characters,
//! not bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
use crate::core::{CalcError, CalcResult};
use crate::store::{EquationStore, DEFAULT_RESULT};

/// A calculator button
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// `AC`: clear the equation and reset the result
    AllClear,
    /// `C`: delete the character before the cursor
    Backspace,
    /// `=`: replace the equation with the current result
    Equals,
    /// Any other label, inserted at the cursor as-is
    Insert(String),
}

impl Button {
    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AllClear => "AC",
            Self::Backspace => "C",
            Self::Equals => "=",
            Self::Insert(text) => text,
        }
    }
}

impl FromStr for Button {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "" => Err(CalcError::InvalidButton(label.to_string())),
            "AC" => Ok(Self::AllClear),
            "C" => Ok(Self::Backspace),
            "=" => Ok(Self::Equals),
            other => Ok(Self::Insert(other.to_string())),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Text in the equation field
    pub equation: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Displayed result
    pub result: String,
}

/// Translates button presses into equation edits
#[derive(Debug)]
pub struct InputController<E = Evaluator> {
    text: String,
    cursor: usize,
    store: EquationStore<E>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    /// Creates a controller with an empty equation and the default store
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(EquationStore::new())
    }
}

impl<E: ExpressionEvaluator> InputController<E> {
    /// Creates a controller around an existing store
    ///
    /// The field starts empty regardless of the store's equation.
    #[must_use]
    pub const fn with_store(store: EquationStore<E>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            store,
        }
    }

    /// Text in the equation field
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Displayed result
    #[must_use]
    pub fn result(&self) -> &str {
        self.store.result()
    }

    /// The backing store
    #[must_use]
    pub const fn store(&self) -> &EquationStore<E> {
        &self.store
    }

    /// The backing store, for subscriptions
    pub fn store_mut(&mut self) -> &mut EquationStore<E> {
        &mut self.store
    }

    /// Captures text, cursor and result
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            equation: self.text.clone(),
            cursor: self.cursor,
            result: self.store.result().to_string(),
        }
    }

    /// Parses a button label and applies it
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let button: Button = label.parse()?;
        self.apply(&button);
        Ok(())
    }

    /// Applies a button press
    pub fn apply(&mut self, button: &Button) {
        trace!(button = button.label(), cursor = self.cursor, "press");

        match button {
            Button::AllClear => {
                self.text.clear();
                self.cursor = 0;
                self.store.set_result(DEFAULT_RESULT);
            }
            Button::Backspace => {
                if self.cursor == 0 || self.text.is_empty() {
                    return;
                }
                let start = self.byte_offset(self.cursor - 1);
                let end = self.byte_offset(self.cursor);
                self.text.replace_range(start..end, "");
                self.cursor -= 1;
                self.store.set_equation(self.text.clone());
            }
            Button::Equals => {
                // Display substitution only; the store is not re-evaluated
                self.text = self.store.result().to_string();
                self.cursor = self.char_len();
            }
            Button::Insert(label) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert_str(at, label);
                self.cursor += label.chars().count();
                self.store.set_equation(self.text.clone());
            }
        }
    }

    /// Replaces the field as if the user typed into it directly
    ///
    /// The cursor is clamped to the new text.
    pub fn edit_text(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.cursor = cursor.min(self.char_len());
        self.store.set_equation(self.text.clone());
    }

    /// Moves the cursor, clamped to the text
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.char_len());
    }

    /// Moves the cursor one character left
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right
    pub fn move_cursor_right(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    /// Moves the cursor to the start of the text
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the text
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}
