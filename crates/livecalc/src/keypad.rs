//! Calculator keypad layout
//!
//! The standard 5x4 grid:
//! ```text
//! [ C ] [ ( ] [ ) ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [AC ] [ 0 ] [ . ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::controller::Button;

/// Row-major labels of the standard keypad
const STANDARD_LAYOUT: [&str; 20] = [
    "C", "(", ")", "/", //
    "7", "8", "9", "*", //
    "4", "5", "6", "+", //
    "1", "2", "3", "-", //
    "AC", "0", ".", "=",
];

const STANDARD_COLS: usize = 4;

/// Visual grouping of a key, used by front ends for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyClass {
    /// Clear and backspace
    Edit,
    /// Parentheses
    Paren,
    /// Arithmetic operators and equals
    Operator,
    /// Digits and the decimal point
    Input,
}

impl KeyClass {
    /// Classifies a button
    #[must_use]
    pub fn of(button: &Button) -> Self {
        match button {
            Button::AllClear | Button::Backspace => Self::Edit,
            Button::Equals => Self::Operator,
            Button::Insert(label) => match label.as_str() {
                "(" | ")" => Self::Paren,
                "+" | "-" | "*" | "/" | "%" => Self::Operator,
                _ => Self::Input,
            },
        }
    }
}

/// A key on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// What pressing the key does
    pub button: Button,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl Key {
    /// Label printed on the key
    #[must_use]
    pub fn label(&self) -> &str {
        self.button.label()
    }

    /// Visual grouping of the key
    #[must_use]
    pub fn class(&self) -> KeyClass {
        KeyClass::of(&self.button)
    }
}

/// A grid of keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    keys: Vec<Key>,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        let keys = STANDARD_LAYOUT
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                let button = label.parse().ok()?;
                Some(Key {
                    button,
                    row: index / STANDARD_COLS,
                    col: index % STANDARD_COLS,
                })
            })
            .collect();

        Self {
            keys,
            cols: STANDARD_COLS,
        }
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the keypad has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Grid dimensions as (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.keys.len().div_ceil(self.cols), self.cols)
    }

    /// Key at a grid position
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Key> {
        if col >= self.cols {
            return None;
        }
        self.keys.get(row * self.cols + col)
    }

    /// Finds a key by its label
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Key> {
        self.keys.iter().find(|key| key.label() == label)
    }

    /// All keys in row-major order
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Iterates the grid one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[Key]> {
        self.keys.chunks(self.cols)
    }
}
