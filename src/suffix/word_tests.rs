//! Tests for word slug generation.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn is_lowercase_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_lowercase())
}

mod composition {
    use super::*;

    #[test]
    fn single_word_is_an_adjective() {
        let slug = generate_word(1).unwrap();

        assert!(!slug.contains('-'));
        assert!(is_lowercase_token(&slug));
        assert!(ADJECTIVES.contains(&slug.as_str()), "{slug} is not an adjective");
    }

    #[test]
    fn three_words_are_two_adjectives_and_a_noun() {
        let slug = generate_word(3).unwrap();
        let tokens: Vec<&str> = slug.split('-').collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| is_lowercase_token(t)));
        assert!(ADJECTIVES.contains(&tokens[0]));
        assert!(ADJECTIVES.contains(&tokens[1]));
        assert!(NOUNS.contains(&tokens[2]));
    }

    #[test]
    fn two_words_end_in_a_noun() {
        let slug = generate_word(2).unwrap();
        let tokens: Vec<&str> = slug.split('-').collect();

        assert_eq!(tokens.len(), 2);
        assert!(ADJECTIVES.contains(&tokens[0]));
        assert!(NOUNS.contains(&tokens[1]));
    }

    #[test]
    fn zero_words_is_treated_as_one() {
        let slug = generate_word_with(&mut StdRng::seed_from_u64(1), 0);

        assert!(!slug.contains('-'));
        assert!(ADJECTIVES.contains(&slug.as_str()));
    }
}

mod seeded {
    use super::*;

    #[test]
    fn same_seed_gives_same_slug() {
        let first = generate_word_with(&mut StdRng::seed_from_u64(42), 3);
        let second = generate_word_with(&mut StdRng::seed_from_u64(42), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn every_adjective_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let drawn: HashSet<String> = (0..20_000).map(|_| generate_word_with(&mut rng, 1)).collect();

        assert_eq!(drawn.len(), ADJECTIVES.len());
    }

    #[test]
    fn every_noun_is_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let drawn: HashSet<String> = (0..20_000)
            .map(|_| generate_word_with(&mut rng, 2))
            .filter_map(|slug| slug.split('-').nth(1).map(str::to_string))
            .collect();

        assert_eq!(drawn.len(), NOUNS.len());
    }
}

mod word_lists {
    use super::*;

    #[test]
    fn entries_are_single_lowercase_tokens() {
        for word in ADJECTIVES.iter().chain(NOUNS) {
            assert!(is_lowercase_token(word), "bad entry {word:?}");
        }
    }

    #[test]
    fn lists_have_no_duplicates() {
        for list in [ADJECTIVES, NOUNS] {
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
