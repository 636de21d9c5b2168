//! Validated command-line settings.
//!
//! Everything the user typed is checked here, before any store is touched.
//! Invalid flags are reported as [`ConfigError`]s; persisted input is handled
//! separately by the salvaging validator in [`super::model`].

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::alias::ServiceName;
use crate::share;

use super::cli::{Cli, Command};
use super::defaults;
use super::error::ConfigError;
use super::model::{Config, Mode, is_valid_domain};

/// Setting edits requested on the command line.
///
/// Applied on top of the loaded config, producing a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edits {
    /// Replacement domain
    pub domain: Option<String>,
    /// Replacement mode
    pub mode: Option<Mode>,
    /// Replacement alpha-mode length
    pub length: Option<u8>,
    /// Replacement word count
    pub word_count: Option<u8>,
}

impl Edits {
    /// Validates the edit flags of `cli`.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain, length or word count is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(domain) = &cli.domain {
            if !is_valid_domain(domain) {
                return Err(ConfigError::InvalidDomain {
                    value: domain.clone(),
                });
            }
        }

        if let Some(length) = cli.length {
            if !defaults::LENGTH_RANGE.contains(&length) {
                return Err(ConfigError::InvalidLength {
                    value: length,
                    min: *defaults::LENGTH_RANGE.start(),
                    max: *defaults::LENGTH_RANGE.end(),
                });
            }
        }

        if let Some(word_count) = cli.word_count {
            if !defaults::WORD_COUNT_RANGE.contains(&word_count) {
                return Err(ConfigError::InvalidWordCount {
                    value: word_count,
                    min: *defaults::WORD_COUNT_RANGE.start(),
                    max: *defaults::WORD_COUNT_RANGE.end(),
                });
            }
        }

        Ok(Self {
            domain: cli.domain.clone(),
            mode: cli.mode.map(Mode::from),
            length: cli.length,
            word_count: cli.word_count,
        })
    }

    /// Returns true if no edit was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.mode.is_none()
            && self.length.is_none()
            && self.word_count.is_none()
    }

    /// Applies the edits, returning the new config.
    #[must_use]
    pub fn apply(&self, config: Config) -> Config {
        let mut config = config;
        if let Some(domain) = &self.domain {
            config = config.with_domain(domain.clone());
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(length) = self.length {
            config = config.with_length(length);
        }
        if let Some(word_count) = self.word_count {
            config = config.with_word_count(word_count);
        }
        config
    }
}

/// Where the durable store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// JSON file on disk.
    File(PathBuf),
    /// Process-local map; nothing survives the run.
    Memory,
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// What the run should do, with its arguments validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print `count` aliases for `service`.
    Generate {
        /// Validated service name
        service: ServiceName,
        /// Number of aliases
        count: usize,
    },
    /// Print `count` bare suffixes.
    Suffix {
        /// Number of suffixes
        count: usize,
    },
    /// Print the resolved config.
    Show,
    /// Print a share URL built on `base`.
    Share {
        /// Page URL receiving the fragment
        base: Url,
    },
    /// Store the default config.
    Reset,
}

/// Fully validated settings ready for use by the application.
#[derive(Debug)]
pub struct Settings {
    /// Action to perform
    pub action: Action,

    /// Encoded config taken from `--from`, without the leading `#`
    pub fragment: Option<String>,

    /// Edits applied after loading
    pub edits: Edits,

    /// Durable store location
    pub store: StoreLocation,

    /// Whether the resolved config is written back
    pub save: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{ store: {}, fragment: {}, edits: {}, save: {} }}",
            self.store,
            if self.fragment.is_some() { "yes" } else { "no" },
            if self.edits.is_empty() { "none" } else { "yes" },
            self.save,
        )
    }
}

impl Settings {
    /// Validates CLI arguments using the platform config directory.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_raw`].
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_raw(cli, dirs::config_dir().as_deref())
    }

    /// Validates CLI arguments.
    ///
    /// `config_dir` is the directory under which the default store is placed
    /// when `--store` is not given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An edit flag is invalid (domain, length, word count)
    /// - The service name or share base URL is invalid
    /// - `reset` is combined with `--no-save`
    /// - No store location can be determined
    pub fn from_raw(cli: &Cli, config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let action = Self::resolve_action(cli.action())?;
        if matches!(action, Action::Reset) && cli.no_save {
            return Err(ConfigError::ResetWithoutSave);
        }

        let edits = Edits::from_cli(cli)?;
        let store = Self::resolve_store(cli, config_dir)?;
        let fragment = cli.from.as_deref().and_then(share::fragment_of);

        // `show` stays read-only unless it also edits something
        let save = !cli.no_save && (!matches!(action, Action::Show) || !edits.is_empty());

        Ok(Self {
            action,
            fragment,
            edits,
            store,
            save,
            verbose: cli.verbose,
        })
    }

    fn resolve_action(command: Command) -> Result<Action, ConfigError> {
        Ok(match command {
            Command::Generate { service, count } => Action::Generate {
                service: ServiceName::parse(&service)?,
                count,
            },
            Command::Suffix { count } => Action::Suffix { count },
            Command::Show => Action::Show,
            Command::Share { base_url } => Action::Share {
                base: Url::parse(&base_url).map_err(|e| ConfigError::InvalidUrl {
                    url: base_url.clone(),
                    reason: e.to_string(),
                })?,
            },
            Command::Reset => Action::Reset,
        })
    }

    fn resolve_store(cli: &Cli, config_dir: Option<&Path>) -> Result<StoreLocation, ConfigError> {
        if cli.no_store {
            return Ok(StoreLocation::Memory);
        }

        if let Some(path) = &cli.store {
            if path.is_dir() {
                return Err(ConfigError::StoreIsDirectory { path: path.clone() });
            }
            return Ok(StoreLocation::File(path.clone()));
        }

        config_dir
            .map(|dir| {
                StoreLocation::File(
                    dir.join(defaults::STORE_DIR_NAME)
                        .join(defaults::STORE_FILE_NAME),
                )
            })
            .ok_or(ConfigError::NoStoreLocation)
    }
}
