//! Tests for alphanumeric suffix generation.

use super::*;
use crate::suffix::mock::ScriptedRng;

fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

mod os_seeded {
    use super::*;

    #[test]
    fn returns_exact_length() {
        for length in [0, 1, 3, 5, 12, 64] {
            let suffix = generate_alpha(length).unwrap();
            assert_eq!(suffix.len(), length);
        }
    }

    #[test]
    fn uses_only_digits_and_lowercase_letters() {
        let suffix = generate_alpha(500).unwrap();
        assert!(suffix.chars().all(is_alphabet_char), "unexpected char in {suffix}");
    }

    #[test]
    fn covers_the_whole_alphabet() {
        let suffix = generate_alpha(36 * 200).unwrap();
        for &c in ALPHABET {
            assert!(suffix.contains(char::from(c)), "{} never drawn", char::from(c));
        }
    }

    #[test]
    fn calls_are_independent() {
        let first = generate_alpha(12).unwrap();
        let second = generate_alpha(12).unwrap();
        assert_ne!(first, second);
    }
}

mod rejection_sampling {
    use super::*;

    #[test]
    fn maps_accepted_bytes_modulo_alphabet() {
        let mut source = ScriptedRng::new(&[0, 35, 36, 71, 216, 251]);
        let suffix = generate_alpha_with(&mut source, 6);
        assert_eq!(suffix, "0z0z0z");
    }

    #[test]
    fn rejects_bytes_at_or_above_252() {
        let mut source = ScriptedRng::new(&[255, 252, 0, 35, 36, 251]);
        let suffix = generate_alpha_with(&mut source, 4);

        assert_eq!(suffix, "0z0z");
        assert_eq!(source.requests, vec![8]);
    }

    #[test]
    fn refills_until_enough_bytes_are_accepted() {
        let mut source = ScriptedRng::new(&[254, 254, 254, 254, 254, 254, 254, 10]);
        let suffix = generate_alpha_with(&mut source, 2);

        assert_eq!(suffix, "aa");
        // Each round asks for the missing characters plus four spare bytes
        assert_eq!(source.requests, vec![6, 6, 5]);
    }

    #[test]
    fn stops_at_requested_length_within_a_batch() {
        let mut source = ScriptedRng::new(&[1]);
        let suffix = generate_alpha_with(&mut source, 3);

        assert_eq!(suffix, "111");
        assert_eq!(source.requests, vec![7]);
    }

    #[test]
    fn zero_length_draws_nothing() {
        let mut source = ScriptedRng::new(&[0]);
        let suffix = generate_alpha_with(&mut source, 0);

        assert!(suffix.is_empty());
        assert!(source.requests.is_empty());
    }
}
