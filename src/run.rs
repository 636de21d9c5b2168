//! Application execution logic.
//!
//! Resolves the active config (fragment, store, defaults, then CLI edits),
//! writes it back, and performs the requested action.

use std::io::{self, Write};

use thiserror::Error;

use alias_gen::alias::Alias;
use alias_gen::config::{Action, Config, Mode, Settings, StoreLocation};
use alias_gen::persist::{ConfigPersistence, FileStore, KeyValueStore, MemoryStore, encode};
use alias_gen::share::share_url;
use alias_gen::suffix::{SuffixError, generate_with, secure_rng};
use rand::CryptoRng;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Suffix generation failed.
    #[error("Failed to generate suffix: {0}")]
    Suffix(#[from] SuffixError),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Executes the action described by `settings`.
///
/// # Errors
///
/// Returns an error if the random source fails or `out` cannot be written.
pub fn execute<W: Write>(settings: &Settings, out: &mut W) -> Result<(), RunError> {
    let store: Box<dyn KeyValueStore> = match &settings.store {
        StoreLocation::File(path) => Box::new(FileStore::new(path)),
        StoreLocation::Memory => Box::new(MemoryStore::new()),
    };

    execute_with(settings, &ConfigPersistence::new(store), &mut secure_rng()?, out)
}

/// Executes with an explicit persistence layer and random generator.
fn execute_with<K, R, W>(
    settings: &Settings,
    persistence: &ConfigPersistence<K>,
    rng: &mut R,
    out: &mut W,
) -> Result<(), RunError>
where
    K: KeyValueStore,
    R: CryptoRng + ?Sized,
    W: Write,
{
    if matches!(settings.action, Action::Reset) {
        let fragment = persistence.reset();
        writeln!(out, "Settings reset to defaults")?;
        write_summary(out, &Config::default(), &fragment)?;
        return Ok(());
    }

    let loaded = persistence.load(settings.fragment.as_deref().unwrap_or_default());
    let config = settings.edits.apply(loaded);
    tracing::debug!("{config}");

    let fragment = if settings.save {
        persistence.save(&config)
    } else {
        encode(&config)
    };

    match &settings.action {
        Action::Generate { service, count } => {
            for _ in 0..*count {
                let suffix = generate_with(rng, &config);
                writeln!(out, "{}", Alias::new(service, suffix, config.domain.as_str()))?;
            }
        }
        Action::Suffix { count } => {
            for _ in 0..*count {
                writeln!(out, "{}", generate_with(rng, &config))?;
            }
        }
        Action::Show => write_summary(out, &config, &fragment)?,
        Action::Share { base } => writeln!(out, "{}", share_url(base, &fragment))?,
        // Handled above: reset ignores the fragment and edits
        Action::Reset => {}
    }

    Ok(())
}

fn write_summary<W: Write>(out: &mut W, config: &Config, fragment: &str) -> io::Result<()> {
    writeln!(out, "domain:   {}", config.domain)?;
    writeln!(out, "mode:     {} ({})", config.mode, config.mode.label())?;
    match config.mode {
        Mode::Alpha => writeln!(out, "length:   {}", config.effective_length())?,
        Mode::Word => writeln!(out, "words:    {}", config.effective_word_count())?,
    }
    writeln!(out, "fragment: #{fragment}")
}
