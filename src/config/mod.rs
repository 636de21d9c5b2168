//! Configuration layer for alias-gen.
//!
//! This module provides:
//! - The configuration value and its salvaging validator ([`Config`], [`validate`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Validated CLI settings ([`Settings`], [`Edits`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The active config is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI edits** - `--domain`, `--mode`, `--length`, `--word-count`
//! 2. **Fragment** - settings carried by `--from <URL|FRAGMENT>`
//! 3. **Store** - settings saved by a previous run
//! 4. **Built-in defaults**
//!
//! Tiers 2 to 4 never fail: unreadable or invalid input falls through to the
//! next tier, and partially valid input keeps its valid fields. CLI edits, on
//! the other hand, are rejected with a [`ConfigError`] when invalid.

mod cli;
pub mod defaults;
mod error;
mod model;
mod settings;


pub use cli::{Cli, Command, ModeArg};
pub use error::ConfigError;
pub(crate) use model::validate_present;
pub use model::{Config, Mode, field, is_valid_domain, validate};
pub use settings::{Action, Edits, Settings, StoreLocation};
