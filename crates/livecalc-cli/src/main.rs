//! livecalc: live-preview calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! livecalc eval "(2+3)*4"          # Evaluate once
//! livecalc press 1 + 2 =           # Replay keypad presses
//! livecalc press --json 9 / 4      # Final state as JSON
//! livecalc keypad                  # Show the keypad
//! livecalc repl                    # Interactive session on stdin
//! ```

use clap::Parser;
use livecalc::controller::InputController;
use livecalc::core::format::NumberFormat;
use livecalc::keypad::Keypad;
use livecalc::store::EquationStore;
use livecalc_cli::{
    logging, repl, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, EvalArgs, PressArgs,
    Printer, Verbosity,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity);
    debug!(?config, "configuration");

    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args),
        Commands::Press(args) => run_press(&config, &args),
        Commands::Keypad => run_keypad(&config),
        Commands::Repl => run_repl(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    let color: ColorChoice = cli.color.clone().into();
    let number_format = cli
        .max_fraction_digits
        .map_or_else(NumberFormat::new, |digits| {
            NumberFormat::new().with_max_fraction_digits(digits)
        });

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_number_format(number_format)
}

fn controller(config: &CliConfig) -> InputController {
    InputController::with_store(EquationStore::new().with_format(config.number_format))
}

fn run_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let store = EquationStore::new().with_format(config.number_format);
    let result = store.evaluate(&args.expression)?;
    info!(expression = %args.expression, %result, "evaluated");
    println!("{result}");
    Ok(())
}

fn run_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let mut labels = Vec::new();
    if let Some(path) = &args.file {
        let script = std::fs::read_to_string(path).map_err(|e| CliError::script(path, e))?;
        labels.extend(script.split_whitespace().map(str::to_string));
    }
    labels.extend(args.labels.iter().cloned());

    let mut controller = controller(config);
    for label in &labels {
        controller.press(label)?;
    }
    info!(presses = labels.len(), "replayed presses");

    let snapshot = controller.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let printer = Printer::new(config.color.should_color());
        println!("{}", printer.snapshot(&snapshot, config.show_cursor()));
    }
    Ok(())
}

fn run_keypad(config: &CliConfig) -> CliResult<()> {
    let printer = Printer::new(config.color.should_color());
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", printer.keypad(&Keypad::standard()))?;
    Ok(())
}

fn run_repl(config: &CliConfig) -> CliResult<()> {
    let printer = Printer::new(config.color.should_color());
    let mut controller = controller(config);
    repl::run(
        &mut controller,
        &printer,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}
