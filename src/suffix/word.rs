//! Word slug suffixes.

use rand::seq::IndexedRandom;
use rand::{CryptoRng, Rng};

use super::words::{ADJECTIVES, NOUNS};
use super::{SuffixError, secure_rng};

#[cfg(test)]
#[path = "word_tests.rs"]
mod tests;

/// Generates a word slug using [`secure_rng`].
///
/// # Errors
///
/// Returns an error if the random source fails.
pub fn generate_word(word_count: usize) -> Result<String, SuffixError> {
    Ok(generate_word_with(&mut secure_rng()?, word_count))
}

/// Generates a hyphen-joined slug of `word_count` lowercase words.
///
/// The first `word_count - 1` words are adjectives and the last is a noun,
/// except that a single word is an adjective. A count of zero is treated as one.
pub fn generate_word_with<R: CryptoRng + ?Sized>(rng: &mut R, word_count: usize) -> String {
    if word_count <= 1 {
        return pick(rng, ADJECTIVES).to_string();
    }

    let mut words = Vec::with_capacity(word_count);
    for _ in 1..word_count {
        words.push(pick(rng, ADJECTIVES));
    }
    words.push(pick(rng, NOUNS));

    words.join("-")
}

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &'static [&'static str]) -> &'static str {
    // Both lists are non-empty constants
    list.choose(rng).copied().unwrap_or_default()
}
