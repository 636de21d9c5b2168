//! Random suffix generation.
//!
//! Two generators, both stateless and drawing from a [`CryptoRng`]:
//!
//! - [`generate_alpha`]: `length` characters from `[0-9a-z]`
//! - [`generate_word`]: hyphen-joined adjectives ending in a noun
//!
//! Every character and every word is equally likely. [`secure_rng`] seeds the
//! production generator from the operating system; tests inject their own.

mod alpha;
mod word;
pub mod words;

pub use alpha::{ALPHABET, generate_alpha, generate_alpha_with};
pub use word::{generate_word, generate_word_with};

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, SeedableRng, TryRngCore};
use thiserror::Error;

use crate::config::{Config, Mode};

/// Errors that can occur while generating a suffix.
#[derive(Debug, Error)]
pub enum SuffixError {
    /// The secure random source failed.
    #[error("Secure random source unavailable: {0}")]
    RandomUnavailable(String),
}

/// Returns a generator seeded from the operating system's CSPRNG.
///
/// # Errors
///
/// Returns [`SuffixError::RandomUnavailable`] if the OS refuses entropy.
pub fn secure_rng() -> Result<StdRng, SuffixError> {
    seeded_from(&mut OsRng)
}

/// Seeds a [`StdRng`] from `source`, mapping its failure.
fn seeded_from<R: TryRngCore>(source: &mut R) -> Result<StdRng, SuffixError> {
    StdRng::try_from_rng(source).map_err(|e| SuffixError::RandomUnavailable(e.to_string()))
}

/// Generates a suffix for `config` using [`secure_rng`].
///
/// # Errors
///
/// Returns an error if the random source fails.
pub fn generate(config: &Config) -> Result<String, SuffixError> {
    Ok(generate_with(&mut secure_rng()?, config))
}

/// Generates a suffix for `config` from `rng`.
///
/// Uses the length in alpha mode and the word count in word mode, falling
/// back to defaults for unset fields.
pub fn generate_with<R: CryptoRng + ?Sized>(rng: &mut R, config: &Config) -> String {
    match config.mode {
        Mode::Alpha => generate_alpha_with(rng, usize::from(config.effective_length())),
        Mode::Word => generate_word_with(rng, usize::from(config.effective_word_count())),
    }
}

/// Test generators.
#[cfg(test)]
pub mod mock {
    use std::fmt;

    use rand::{CryptoRng, RngCore, TryRngCore};

    /// Replays a fixed byte script, cycling when it runs out.
    #[derive(Debug)]
    pub struct ScriptedRng {
        script: Vec<u8>,
        position: usize,
        /// Sizes of every `fill_bytes` request, in order.
        pub requests: Vec<usize>,
    }

    impl ScriptedRng {
        /// Creates a generator replaying `script`.
        ///
        /// # Panics
        ///
        /// Panics if `script` is empty.
        #[must_use]
        pub fn new(script: &[u8]) -> Self {
            assert!(!script.is_empty(), "script must not be empty");
            Self {
                script: script.to_vec(),
                position: 0,
                requests: Vec::new(),
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.requests.push(dst.len());
            for byte in dst.iter_mut() {
                *byte = self.script[self.position % self.script.len()];
                self.position += 1;
            }
        }
    }

    impl CryptoRng for ScriptedRng {}

    /// Error reported by [`UnavailableSource`].
    #[derive(Debug)]
    pub struct EntropyClosed;

    impl fmt::Display for EntropyClosed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("entropy pool closed")
        }
    }

    /// An entropy source that always fails.
    #[derive(Debug, Default)]
    pub struct UnavailableSource;

    impl TryRngCore for UnavailableSource {
        type Error = EntropyClosed;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Err(EntropyClosed)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Err(EntropyClosed)
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
            Err(EntropyClosed)
        }
    }
}
