//! livecalc CLI library
//!
//! Command-line front end for the live-preview calculator: one-shot
//! evaluation, keypad press replay, and a line-based interactive session.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;
pub use repl::ReplCommand;
