//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// livecalc: a live-preview calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "livecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Round results to at most this many fractional digits
    #[arg(long, value_name = "N", global = true)]
    pub max_fraction_digits: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression and print the result
    Eval(EvalArgs),

    /// Replay keypad presses and print the final state
    Press(PressArgs),

    /// Show the keypad layout
    Keypad,

    /// Interactive session reading presses from stdin
    Repl,
}

/// Arguments for `eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Arithmetic expression, e.g. "(2+3)*4"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for `press`
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels in order, e.g. 1 + 2 =
    pub labels: Vec<String>,

    /// Read whitespace separated labels from a file, before any given inline
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
