//! Terminal rendering of calculator state

use console::style;
use livecalc::controller::Snapshot;
use livecalc::keypad::{KeyClass, Keypad};

/// Marker drawn at the cursor position
pub const CURSOR_MARKER: char = '|';

/// Width of a rendered key, brackets included
const KEY_WIDTH: usize = 6;

/// Renders snapshots and the keypad as text
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    /// Whether to use colors
    pub use_color: bool,
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Equation and result, one per line
    ///
    /// With `show_cursor` the equation gets a `|` at the cursor.
    #[must_use]
    pub fn snapshot(&self, snapshot: &Snapshot, show_cursor: bool) -> String {
        let equation = if show_cursor {
            with_cursor(&snapshot.equation, snapshot.cursor)
        } else {
            snapshot.equation.clone()
        };

        format!(
            "{}\n{} {}",
            style(equation).force_styling(self.use_color).bold(),
            style("=").force_styling(self.use_color).dim(),
            style(&snapshot.result)
                .force_styling(self.use_color)
                .green()
                .bold(),
        )
    }

    /// The keypad as a bracketed grid
    #[must_use]
    pub fn keypad(&self, keypad: &Keypad) -> String {
        keypad
            .rows()
            .map(|row| {
                row.iter()
                    .map(|key| {
                        let cell = format!("[{:^w$}]", key.label(), w = KEY_WIDTH - 2);
                        let cell = style(cell).force_styling(self.use_color);
                        let styled = match key.class() {
                            KeyClass::Edit => cell.red(),
                            KeyClass::Paren => cell.white().dim(),
                            KeyClass::Operator => cell.yellow(),
                            KeyClass::Input => cell.cyan(),
                        };
                        styled.to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Inserts the cursor marker at a character offset
#[must_use]
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut placed = false;
    for (i, ch) in text.chars().enumerate() {
        if i == cursor {
            out.push(CURSOR_MARKER);
            placed = true;
        }
        out.push(ch);
    }
    if !placed {
        out.push(CURSOR_MARKER);
    }
    out
}
