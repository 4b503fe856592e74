//! Settings resolved from the command line

use livecalc::core::format::NumberFormat;
use serde::{Deserialize, Serialize};

/// How chatty the process is on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// `-q`: errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// `-v`: calculator decisions such as retained results
    Verbose,
    /// `-vv`: every keypress
    Debug,
}

impl Verbosity {
    /// `-q` wins over any number of `-v`
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Debug,
        }
    }

    /// At least `-v`
    #[must_use]
    pub fn is_verbose(self) -> bool {
        self >= Self::Verbose
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info,livecalc=debug",
            Self::Debug => "debug,livecalc=trace",
        }
    }
}

/// `--color` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Force ANSI styling
    Always,
    /// Style only when stdout is a color terminal
    #[default]
    Auto,
    /// Plain text
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against the actual stdout
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// Everything the subcommands need from the global flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level and output detail
    pub verbosity: Verbosity,
    /// Terminal styling
    pub color: ColorChoice,
    /// Result display policy handed to the equation store
    pub number_format: NumberFormat,
}

impl CliConfig {
    /// Defaults: normal verbosity, auto color, shortest number output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Replaces the color setting
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Replaces the number display policy
    #[must_use]
    pub const fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Whether printed equations carry the cursor marker
    #[must_use]
    pub fn show_cursor(&self) -> bool {
        self.verbosity.is_verbose()
    }
}
