//! alias-gen: per-service email alias generator
//!
//! Entry point for the alias-gen application.

use alias_gen::config::{Cli, Settings};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Validate command-line settings
    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(settings.verbose);
    tracing::debug!("{settings}");

    run_application(&settings)
}

/// Runs the requested action, writing results to stdout.
#[cfg(not(tarpaulin_include))]
fn run_application(settings: &Settings) -> ExitCode {
    let mut stdout = std::io::stdout().lock();

    match run::execute(settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
