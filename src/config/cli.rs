//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::model::Mode;

/// alias-gen: per-service email alias generator
///
/// Builds addresses of the form `service+suffix@domain`. The active settings
/// are remembered between runs and can be shared as a URL fragment.
#[derive(Debug, Parser)]
#[command(name = "alias-gen")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load settings from a share URL or fragment (takes priority over the store)
    #[arg(long, global = true, value_name = "URL|FRAGMENT")]
    pub from: Option<String>,

    /// Alias domain
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Suffix mode
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Suffix length in alpha mode (3-12)
    #[arg(long, global = true)]
    pub length: Option<u8>,

    /// Number of words in word mode (1-3)
    #[arg(long = "word-count", global = true)]
    pub word_count: Option<u8>,

    /// Path to the store file
    #[arg(long, global = true, conflicts_with = "no_store")]
    pub store: Option<PathBuf>,

    /// Do not read or write the store file
    #[arg(long = "no-store", global = true)]
    pub no_store: bool,

    /// Do not save the resolved settings
    #[arg(long = "no-save", global = true)]
    pub no_save: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for alias-gen
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate aliases for a service
    Generate {
        /// Service name (letters, digits, spaces, hyphens, underscores)
        service: String,

        /// Number of aliases to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Print bare suffixes
    Suffix {
        /// Number of suffixes to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Show the resolved settings and their fragment
    Show,

    /// Print a share URL carrying the resolved settings
    Share {
        /// Page URL the fragment is attached to
        base_url: String,
    },

    /// Restore and store the default settings
    Reset,
}

/// Suffix mode argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Random characters from [0-9a-z]
    #[value(name = "alpha")]
    Alpha,
    /// Random words (adjectives and a noun)
    #[value(name = "word")]
    Word,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Alpha => Self::Alpha,
            ModeArg::Word => Self::Word,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the command to run, defaulting to [`Command::Show`].
    #[must_use]
    pub fn action(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}
