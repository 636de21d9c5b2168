//! Alphanumeric suffixes.

use rand::CryptoRng;

use super::{SuffixError, secure_rng};

#[cfg(test)]
#[path = "alpha_tests.rs"]
mod tests;

/// Characters an alpha suffix is drawn from.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Bytes at or above this value are rejected (256 - 256 % 36 = 252).
#[allow(clippy::cast_possible_truncation)]
const LIMIT: u16 = 256 - (256 % ALPHABET.len() as u16);

/// Extra bytes requested per round, so one round usually suffices.
const OVERDRAW: usize = 4;

/// Generates `length` characters from [`ALPHABET`] using [`secure_rng`].
///
/// # Errors
///
/// Returns an error if the random source fails.
pub fn generate_alpha(length: usize) -> Result<String, SuffixError> {
    Ok(generate_alpha_with(&mut secure_rng()?, length))
}

/// Generates `length` characters from [`ALPHABET`] using `rng`.
///
/// Each byte below 252 maps to `ALPHABET[byte % 36]`; the rest are
/// discarded, so every character is equally likely. Bytes are drawn in
/// batches until enough have been accepted.
pub fn generate_alpha_with<R: CryptoRng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut suffix = String::with_capacity(length);

    while suffix.len() < length {
        let mut batch = vec![0u8; length - suffix.len() + OVERDRAW];
        rng.fill_bytes(&mut batch);

        for byte in batch
            .into_iter()
            .filter(|&b| u16::from(b) < LIMIT)
            .take(length - suffix.len())
        {
            suffix.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
        }
    }

    suffix
}
