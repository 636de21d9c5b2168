//! Config persistence through a URL fragment and a durable store.
//!
//! Both channels carry the same *plain projection* of a [`Config`]: the
//! domain, the mode, and only the numeric field relevant to that mode.
//!
//! - The fragment holds the projection's JSON, base64 encoded. It is the
//!   shareable, authoritative form and wins on load.
//! - The store holds the projection's JSON as-is under [`STORAGE_KEY`]. It is
//!   the fallback for runs without a fragment.
//!
//! Nothing here returns an error: corrupt input degrades to the next tier,
//! and finally to [`Config::default`]; failed writes are logged and skipped.

mod file;
mod store;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore, StoreError};

#[cfg(test)]
pub use store::mock;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::Value;

use crate::config::defaults::STORAGE_KEY;
use crate::config::{Config, Mode, validate_present};

/// Standard base64 with padding on output. Decoding is as lenient as a
/// browser's `atob`: padding is optional and stray trailing bits are ignored.
const FRAGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// The persisted form of a [`Config`].
///
/// Field order is part of the format: `domain`, `mode`, then `length` or
/// `wordCount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainConfig {
    domain: String,
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<u8>,
    #[serde(rename = "wordCount", skip_serializing_if = "Option::is_none")]
    word_count: Option<u8>,
}

impl From<&Config> for PlainConfig {
    fn from(config: &Config) -> Self {
        let (length, word_count) = match config.mode {
            Mode::Alpha => (Some(config.effective_length()), None),
            Mode::Word => (None, Some(config.effective_word_count())),
        };
        Self {
            domain: config.domain.clone(),
            mode: config.mode,
            length,
            word_count,
        }
    }
}

impl From<PlainConfig> for Config {
    fn from(plain: PlainConfig) -> Self {
        Self {
            domain: plain.domain,
            mode: plain.mode,
            length: plain.length,
            word_count: plain.word_count,
        }
    }
}

impl PlainConfig {
    /// JSON text of the projection.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Only strings and small integers: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize config: {e}");
            String::new()
        })
    }
}

/// Encodes a config for use as a URL fragment (without the `#`).
#[must_use]
pub fn encode(config: &Config) -> String {
    FRAGMENT_ENGINE.encode(PlainConfig::from(config).to_json())
}

/// Decodes a fragment, falling back to defaults on any failure.
///
/// A leading `#` is ignored.
#[must_use]
pub fn decode(text: &str) -> Config {
    decode_fragment(text).unwrap_or_default()
}

/// Decodes a fragment, returning `None` when it holds nothing usable.
fn decode_fragment(text: &str) -> Option<Config> {
    let text = text.trim();
    let encoded = text.strip_prefix('#').unwrap_or(text);
    if encoded.is_empty() {
        return None;
    }

    let bytes = FRAGMENT_ENGINE
        .decode(encoded)
        .map_err(|e| tracing::debug!("Fragment is not valid base64: {e}"))
        .ok()?;
    let json = String::from_utf8(bytes)
        .map_err(|e| tracing::debug!("Fragment is not valid UTF-8: {e}"))
        .ok()?;

    parse_json(&json)
}

/// Parses and validates the JSON form, returning `None` when unusable.
///
/// Empty text, invalid JSON and `null` are unusable; any other value is
/// validated, salvaging to defaults where needed.
fn parse_json(json: &str) -> Option<Config> {
    if json.is_empty() {
        return None;
    }

    let raw: Value = serde_json::from_str(json)
        .map_err(|e| tracing::debug!("Config is not valid JSON: {e}"))
        .ok()?;

    let config = validate_present(&raw);
    if config.is_none() {
        tracing::debug!("Config JSON is null, ignoring");
    }
    config
}

/// Loads and saves configs through a fragment and a [`KeyValueStore`].
#[derive(Debug)]
pub struct ConfigPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> ConfigPersistence<S> {
    /// Creates a persistence layer over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the active config.
    ///
    /// Tries, in order: the fragment (a leading `#` is stripped), the store,
    /// and the defaults. Each tier fails independently.
    #[must_use]
    pub fn load(&self, fragment: &str) -> Config {
        if let Some(config) = decode_fragment(fragment) {
            tracing::debug!("Loaded config from fragment");
            return config;
        }

        if let Some(config) = self.read_store() {
            tracing::debug!("Loaded config from store");
            return config;
        }

        tracing::debug!("Using default config");
        Config::default()
    }

    /// Stores `config` and returns its fragment encoding.
    ///
    /// The stored JSON and the fragment come from the same projection, so the
    /// two never diverge. A failed store write is logged and otherwise ignored.
    pub fn save(&self, config: &Config) -> String {
        let json = PlainConfig::from(config).to_json();

        match self.store.set(STORAGE_KEY, &json) {
            Ok(()) => tracing::debug!("Saved config to store"),
            Err(e) => tracing::warn!("Config not saved: {e}"),
        }

        FRAGMENT_ENGINE.encode(json)
    }

    /// Stores the default config and returns its fragment encoding.
    pub fn reset(&self) -> String {
        self.save(&Config::default())
    }

    fn read_store(&self) -> Option<Config> {
        match self.store.get(STORAGE_KEY) {
            Ok(Some(json)) => parse_json(&json),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Store unreadable, ignoring: {e}");
                None
            }
        }
    }
}
