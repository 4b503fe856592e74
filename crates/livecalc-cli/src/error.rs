//! CLI error type

use std::path::PathBuf;

use livecalc::core::CalcError;
use thiserror::Error;

/// Result alias for the CLI
pub type CliResult<T> = Result<T, CliError>;

/// Anything that ends a CLI run with a failure exit code
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal or stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `press --file` could not be read
    #[error("cannot read press script {}: {source}", path.display())]
    Script {
        /// Script path as given
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// Rejected expression in `eval`, or an empty button label
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// Snapshot serialization for `--json`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed user input outside the calculator itself
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong
        message: String,
    },
}

impl CliError {
    /// `InvalidArgument` from any message
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wraps a failed script read with its path
    #[must_use]
    pub fn script(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Script {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_calc_errors_display_unchanged() {
        let err: CliError = CalcError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Division by zero");
        let err: CliError = CalcError::UnexpectedEnd.into();
        assert_eq!(err.to_string(), "Unexpected end of expression");
    }

    #[test]
    fn test_invalid_argument_message() {
        assert_eq!(
            CliError::invalid_argument("cursor position expected").to_string(),
            "Invalid argument: cursor position expected"
        );
    }

    #[test]
    fn test_script_error_names_path_and_keeps_source() {
        let err = CliError::script(
            "presses.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "cannot read press script presses.txt: no such file"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_and_json_conversions() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.to_string().starts_with("I/O error"));

        let err: CliError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
