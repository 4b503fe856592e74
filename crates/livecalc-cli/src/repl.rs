//! Line-oriented interactive session
//!
//! Each input line is either whitespace-separated button labels
//! (`1 + 2 =`) or a `:command`. The state is printed after every line.

use std::io::{BufRead, Write};

use livecalc::controller::InputController;
use livecalc::keypad::Keypad;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::Printer;

const PROMPT: &str = "> ";

const HELP: &str = "\
Type button labels separated by spaces, e.g. `1 + 2 =`.
Buttons: digits . + - * / ( )   C (backspace)   AC (all clear)   = (take result)
Commands:
  :text <expr>   replace the equation as if typed
  :cursor <n>    move the cursor
  :left :right :home :end
  :keypad        show the keypad
  :help          show this help
  :quit          leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Button labels to press in order
    Press(Vec<String>),
    /// Raw equation edit; the cursor goes to the end
    Text(String),
    /// Move the cursor to a position
    Cursor(usize),
    /// Move the cursor left
    Left,
    /// Move the cursor right
    Right,
    /// Move the cursor to the start
    Home,
    /// Move the cursor to the end
    End,
    /// Show the keypad
    Keypad,
    /// Show help
    Help,
    /// End the session
    Quit,
}

impl ReplCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(command) = line.strip_prefix(':') else {
            let labels = line.split_whitespace().map(str::to_string).collect();
            return Ok(Some(Self::Press(labels)));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        let parsed = match name {
            "text" => Self::Text(arg.to_string()),
            "cursor" => Self::Cursor(arg.parse().map_err(|_| {
                CliError::invalid_argument(format!("cursor position expected, got {arg:?}"))
            })?),
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            "keypad" => Self::Keypad,
            "help" => Self::Help,
            "quit" | "q" => Self::Quit,
            other => {
                return Err(CliError::invalid_argument(format!(
                    "unknown command :{other} (try :help)"
                )))
            }
        };
        Ok(Some(parsed))
    }
}

/// Runs the session until `:quit` or end of input
///
/// Bad lines are reported on `output` and the session continues.
pub fn run<R: BufRead, W: Write>(
    controller: &mut InputController,
    printer: &Printer,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let keypad = Keypad::standard();
    writeln!(output, "{}", printer.snapshot(&controller.snapshot(), true))?;

    for line in input.lines() {
        let line = line?;
        write!(output, "{PROMPT}")?;

        let command = match ReplCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                writeln!(output)?;
                continue;
            }
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        debug!(?command, "repl");

        match command {
            ReplCommand::Quit => {
                writeln!(output)?;
                break;
            }
            ReplCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ReplCommand::Keypad => {
                writeln!(output, "{}", printer.keypad(&keypad))?;
                continue;
            }
            ReplCommand::Press(labels) => {
                for label in &labels {
                    controller.press(label)?;
                }
            }
            ReplCommand::Text(text) => {
                let end = text.chars().count();
                controller.edit_text(text, end);
            }
            ReplCommand::Cursor(pos) => controller.set_cursor(pos),
            ReplCommand::Left => controller.move_cursor_left(),
            ReplCommand::Right => controller.move_cursor_right(),
            ReplCommand::Home => controller.move_cursor_home(),
            ReplCommand::End => controller.move_cursor_end(),
        }

        writeln!(output, "{}", printer.snapshot(&controller.snapshot(), true))?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (InputController, String) {
        let mut controller = InputController::new();
        let mut out = Vec::new();
        run(
            &mut controller,
            &Printer::new(false),
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    // ===== Parsing =====

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            ReplCommand::parse(" 1 +  2 ").unwrap(),
            Some(ReplCommand::Press(vec!["1".into(), "+".into(), "2".into()]))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ReplCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ReplCommand::parse(":text 3 * (1+1)").unwrap(),
            Some(ReplCommand::Text("3 * (1+1)".into()))
        );
        assert_eq!(
            ReplCommand::parse(":cursor 2").unwrap(),
            Some(ReplCommand::Cursor(2))
        );
        assert_eq!(ReplCommand::parse(":home").unwrap(), Some(ReplCommand::Home));
        assert_eq!(ReplCommand::parse(":q").unwrap(), Some(ReplCommand::Quit));
        assert_eq!(
            ReplCommand::parse(":text").unwrap(),
            Some(ReplCommand::Text(String::new()))
        );
    }

    #[test]
    fn test_parse_bad_commands() {
        assert!(matches!(
            ReplCommand::parse(":cursor x"),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ReplCommand::parse(":bogus"),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    // ===== Sessions =====

    #[test]
    fn test_session_presses() {
        let (controller, out) = session("1 + 2\n=\n");
        assert_eq!(controller.text(), "3");
        assert!(out.contains("1+2|\n= 3"));
        assert!(out.ends_with("3|\n= 3\n"));
    }

    #[test]
    fn test_session_cursor_editing() {
        let (controller, _) = session(":text 12\n:home\n:right\n+\n");
        assert_eq!(controller.text(), "1+2");
        assert_eq!(controller.result(), "3");
    }

    #[test]
    fn test_session_keeps_result_on_incomplete() {
        let (controller, out) = session("9\n*\n");
        assert_eq!(controller.result(), "9");
        assert!(out.contains("9*|\n= 9"));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let (controller, out) = session(":nope\n4\n");
        assert!(out.contains("error: Invalid argument: unknown command :nope"));
        assert_eq!(controller.text(), "4");
    }

    #[test]
    fn test_session_quit_stops_reading() {
        let (controller, _) = session("5\n:quit\n6\n");
        assert_eq!(controller.text(), "5");
    }

    #[test]
    fn test_session_keypad_and_help() {
        let (_, out) = session(":keypad\n:help\n");
        assert!(out.contains("[ AC ]"));
        assert!(out.contains(":cursor <n>"));
    }
}
