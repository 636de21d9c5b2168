//! The alias configuration value and its validation rules.
//!
//! Untrusted input (a hand-edited fragment, a corrupted store entry) is
//! validated in two tiers:
//!
//! 1. **Strict** - the whole mapping must satisfy every rule; the value is
//!    returned unchanged (optional numeric fields stay absent when absent).
//! 2. **Salvage** - each field is checked on its own and replaced by its
//!    default when missing or invalid.
//!
//! Neither tier fails: [`validate`] always yields a usable [`Config`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::defaults;
use super::error::ConfigError;

/// Lowercase dotted hostname whose final label has at least two letters.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9.-]+\.[a-z]{2,}$").expect("domain pattern is a valid regex")
});

/// Field names used in the untyped mapping.
pub mod field {
    /// The alias domain.
    pub const DOMAIN: &str = "domain";
    /// The suffix mode.
    pub const MODE: &str = "mode";
    /// Suffix length (alpha mode).
    pub const LENGTH: &str = "length";
    /// Word count (word mode).
    pub const WORD_COUNT: &str = "wordCount";
}

/// How a suffix is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fixed-length string over `[0-9a-z]`.
    Alpha,
    /// Hyphen-joined adjectives followed by a noun.
    Word,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Self; 2] = [Self::Alpha, Self::Word];

    /// Wire name used in fragments and the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Word => "word",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alpha => "Random characters",
            Self::Word => "Random words",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidMode {
                value: s.to_string(),
            })
    }
}

/// Alias generation settings.
///
/// A plain value: edits produce a new `Config` rather than mutating a shared one.
/// Only the numeric field matching [`Config::mode`] is meaningful; the other one
/// is ignored when the value is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Domain the aliases are addressed to.
    pub domain: String,

    /// Suffix generation mode.
    pub mode: Mode,

    /// Suffix length for [`Mode::Alpha`].
    pub length: Option<u8>,

    /// Number of words for [`Mode::Word`].
    pub word_count: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: defaults::DOMAIN.to_string(),
            mode: defaults::MODE,
            length: Some(defaults::LENGTH),
            word_count: Some(defaults::WORD_COUNT),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Alpha => write!(
                f,
                "Config {{ domain: {}, mode: {}, length: {} }}",
                self.domain,
                self.mode,
                self.effective_length()
            ),
            Mode::Word => write!(
                f,
                "Config {{ domain: {}, mode: {}, word_count: {} }}",
                self.domain,
                self.mode,
                self.effective_word_count()
            ),
        }
    }
}

impl Config {
    /// Creates a config with the given domain and mode and no numeric fields set.
    #[must_use]
    pub fn new(domain: impl Into<String>, mode: Mode) -> Self {
        Self {
            domain: domain.into(),
            mode,
            length: None,
            word_count: None,
        }
    }

    /// Returns a copy with the domain replaced.
    #[must_use]
    pub fn with_domain(self, domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..self
        }
    }

    /// Returns a copy with the mode replaced.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with the alpha-mode length replaced.
    #[must_use]
    pub fn with_length(self, length: u8) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    /// Returns a copy with the word-mode count replaced.
    #[must_use]
    pub fn with_word_count(self, word_count: u8) -> Self {
        Self {
            word_count: Some(word_count),
            ..self
        }
    }

    /// Suffix length, falling back to the default when unset.
    #[must_use]
    pub fn effective_length(&self) -> u8 {
        self.length.unwrap_or(defaults::LENGTH)
    }

    /// Word count, falling back to the default when unset.
    #[must_use]
    pub fn effective_word_count(&self) -> u8 {
        self.word_count.unwrap_or(defaults::WORD_COUNT)
    }
}

/// Returns `true` if `domain` is an acceptable alias domain.
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && DOMAIN_PATTERN.is_match(domain)
}

/// Validates untrusted input, never failing.
///
/// Objects go through strict validation and, failing that, per-field salvage.
/// Anything that is not a JSON object yields the default config.
#[must_use]
pub fn validate(raw: &Value) -> Config {
    validate_present(raw).unwrap_or_default()
}

/// Like [`validate`], but returns `None` when `raw` is JSON `null`.
///
/// The load chain uses this to tell "nothing stored here" apart from
/// "salvaged to defaults". Other non-object values salvage to defaults, just
/// like an empty object.
pub(crate) fn validate_present(raw: &Value) -> Option<Config> {
    if raw.is_null() {
        return None;
    }

    let Some(map) = raw.as_object() else {
        tracing::debug!("Config is not an object, using defaults");
        return Some(Config::default());
    };

    Some(strict(map).unwrap_or_else(|| {
        tracing::debug!("Config failed strict validation, salvaging fields");
        salvage(map)
    }))
}

fn strict(map: &Map<String, Value>) -> Option<Config> {
    let domain = map
        .get(field::DOMAIN)
        .and_then(Value::as_str)
        .filter(|d| is_valid_domain(d))?;
    let mode = map.get(field::MODE).and_then(mode_of)?;
    let length = optional_in(map.get(field::LENGTH), &defaults::LENGTH_RANGE)?;
    let word_count = optional_in(map.get(field::WORD_COUNT), &defaults::WORD_COUNT_RANGE)?;

    Some(Config {
        domain: domain.to_string(),
        mode,
        length,
        word_count,
    })
}

/// Per-field recovery.
///
/// The numeric fields are gated on the *raw* mode string, not the recovered
/// mode: a length is only honored when the input literally says `"alpha"`.
fn salvage(map: &Map<String, Value>) -> Config {
    let raw_mode = map.get(field::MODE).and_then(Value::as_str);

    let domain = map
        .get(field::DOMAIN)
        .and_then(Value::as_str)
        .filter(|d| is_valid_domain(d))
        .map_or_else(|| defaults::DOMAIN.to_string(), str::to_string);

    let mode = map
        .get(field::MODE)
        .and_then(mode_of)
        .unwrap_or(defaults::MODE);

    let length = (raw_mode == Some(Mode::Alpha.as_str()))
        .then(|| map.get(field::LENGTH))
        .flatten()
        .and_then(|v| integer_in(v, &defaults::LENGTH_RANGE))
        .unwrap_or(defaults::LENGTH);

    let word_count = (raw_mode == Some(Mode::Word.as_str()))
        .then(|| map.get(field::WORD_COUNT))
        .flatten()
        .and_then(|v| integer_in(v, &defaults::WORD_COUNT_RANGE))
        .unwrap_or(defaults::WORD_COUNT);

    Config {
        domain,
        mode,
        length: Some(length),
        word_count: Some(word_count),
    }
}

fn mode_of(value: &Value) -> Option<Mode> {
    value.as_str().and_then(|s| s.parse().ok())
}

/// An absent field is fine (`Some(None)`); a present one must be in range.
fn optional_in(value: Option<&Value>, range: &RangeInclusive<u8>) -> Option<Option<u8>> {
    value.map_or(Some(None), |v| integer_in(v, range).map(Some))
}

fn integer_in(value: &Value, range: &RangeInclusive<u8>) -> Option<u8> {
    as_integer(value)
        .and_then(|n| u8::try_from(n).ok())
        .filter(|n| range.contains(n))
}

/// Integral JSON numbers, including float spellings such as `5.0`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15).then_some(f as i64)
}
