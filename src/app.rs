//! Startup helpers for the binary: exit codes, error hints and logging.

use alias_gen::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes other than success.
pub mod exit_code {
    use std::process::ExitCode;

    /// Rejected flags, service name or share URL.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Random source unavailable or output closed.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::InvalidDomain { .. } => {
            eprintln!("\nDomains are lowercase, e.g. 'example.com' or 'mail.example.org'.");
        }
        ConfigError::InvalidServiceName { .. } => {
            eprintln!("\nQuote names containing spaces, e.g. alias-gen generate \"My Bank\".");
        }
        ConfigError::InvalidUrl { .. } => {
            eprintln!("\nShare URLs must be absolute, e.g. https://example.com/aliases.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only the generated output.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
