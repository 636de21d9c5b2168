//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::ops::RangeInclusive;

use super::model::Mode;

/// Default alias domain.
pub const DOMAIN: &str = "example.com";

/// Default suffix mode.
pub const MODE: Mode = Mode::Alpha;

/// Default suffix length in alpha mode.
pub const LENGTH: u8 = 5;

/// Default number of words in word mode.
pub const WORD_COUNT: u8 = 1;

/// Accepted suffix lengths in alpha mode.
pub const LENGTH_RANGE: RangeInclusive<u8> = 3..=12;

/// Accepted word counts in word mode.
pub const WORD_COUNT_RANGE: RangeInclusive<u8> = 1..=3;

/// Key under which the durable store keeps the configuration.
pub const STORAGE_KEY: &str = "alias-gen-config";

/// File name of the default durable store.
pub const STORE_FILE_NAME: &str = "store.json";

/// Directory (under the platform config dir) holding the default store.
pub const STORE_DIR_NAME: &str = "alias-gen";
