//! Word corpus
//!
//! Provides the embedded corpus compiled into the binary and helpers for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_targets() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Corpus contains an empty word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn corpus_supports_rerolls() {
        assert!(WORDS_COUNT > 1, "A single-word corpus can never re-roll");
    }
}
