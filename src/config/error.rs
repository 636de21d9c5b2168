//! Error types for command-line configuration.
//!
//! Persisted input never produces these: fragments and store entries are
//! salvaged instead. They cover values the user typed explicitly.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Domain does not look like a lowercase dotted hostname.
    #[error("Invalid domain '{value}': expected a lowercase hostname such as 'example.com'")]
    InvalidDomain {
        /// The rejected domain
        value: String,
    },

    /// Unknown suffix mode.
    #[error("Invalid mode '{value}': expected alpha or word")]
    InvalidMode {
        /// The rejected mode
        value: String,
    },

    /// Suffix length outside the accepted range.
    #[error("Invalid length {value}: must be between {min} and {max}")]
    InvalidLength {
        /// The rejected length
        value: u8,
        /// Smallest accepted length
        min: u8,
        /// Largest accepted length
        max: u8,
    },

    /// Word count outside the accepted range.
    #[error("Invalid word count {value}: must be between {min} and {max}")]
    InvalidWordCount {
        /// The rejected word count
        value: u8,
        /// Smallest accepted count
        min: u8,
        /// Largest accepted count
        max: u8,
    },

    /// Service name is empty or contains unsupported characters.
    #[error("Invalid service name '{value}': {reason}")]
    InvalidServiceName {
        /// The rejected service name
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Base URL for sharing could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// `reset` was asked not to save.
    #[error("reset writes the defaults to the store and cannot be combined with --no-save")]
    ResetWithoutSave,

    /// No store path given and no platform config directory available.
    #[error("Cannot determine a store location; pass --store <PATH> or --no-store")]
    NoStoreLocation,

    /// Explicit store path points at a directory.
    #[error("Store path '{}' is a directory", path.display())]
    StoreIsDirectory {
        /// The offending path
        path: PathBuf,
    },
}
