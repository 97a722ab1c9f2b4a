//! Formatting utilities for snapshot display

use crate::core::{GameStatus, Letter};
use crate::session::{RevealedLetter, Snapshot};

/// Placeholder for a letter that has not been found yet
pub const HIDDEN_CHAR: char = '_';

/// Render the target word with unguessed positions masked
///
/// Missed letters (shown after the game ends) are wrapped in brackets.
#[must_use]
pub fn masked_word(snapshot: &Snapshot) -> String {
    snapshot
        .revealed_letters()
        .iter()
        .map(|slot| match slot {
            RevealedLetter::Revealed(letter) => letter.as_char().to_ascii_uppercase().to_string(),
            RevealedLetter::Missed(letter) => {
                format!("[{}]", letter.as_char().to_ascii_uppercase())
            }
            RevealedLetter::Hidden => HIDDEN_CHAR.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters guessed so far in the order they were chosen
#[must_use]
pub fn guessed_letters(snapshot: &Snapshot) -> String {
    snapshot
        .guesses
        .iter()
        .map(|letter| letter.as_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters still available to guess
#[must_use]
pub fn available_letters(snapshot: &Snapshot) -> String {
    Letter::alphabet()
        .filter(|&letter| !snapshot.is_key_disabled(letter) && !snapshot.guesses.contains(letter))
        .map(Letter::as_char)
        .collect()
}

/// Headline for a finished game, `None` while it is still running
#[must_use]
pub fn outcome_headline(snapshot: &Snapshot) -> Option<(&'static str, &'static str)> {
    match snapshot.status {
        GameStatus::Won => Some(("You win!", "Well done!")),
        GameStatus::Lost => Some(("Game over!", "You lose! Better start learning Assembly")),
        GameStatus::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SeverityLadder, Word};
    use crate::session::Session;

    fn snapshot(word: &str, letters: &str) -> Snapshot {
        letters
            .chars()
            .fold(
                Session::with_word(SeverityLadder::languages(), Word::new(word).unwrap()),
                |session, ch| session.guess(Letter::try_from(ch).unwrap()),
            )
            .snapshot()
    }

    #[test]
    fn masked_word_hides_unguessed() {
        assert_eq!(masked_word(&snapshot("kettle", "te")), "_ E T T _ E");
    }

    #[test]
    fn masked_word_brackets_missed_letters() {
        let snap = snapshot("cat", "cqwrsuvyz");
        assert_eq!(masked_word(&snap), "C [A] [T]");
    }

    #[test]
    fn guessed_letters_in_order() {
        assert_eq!(guessed_letters(&snapshot("cat", "tqa")), "T Q A");
    }

    #[test]
    fn available_letters_drop_guesses() {
        let available = available_letters(&snapshot("cat", "cq"));
        assert_eq!(available.len(), 24);
        assert!(!available.contains('c'));
        assert!(!available.contains('q'));
    }

    #[test]
    fn headline_only_when_over() {
        assert!(outcome_headline(&snapshot("cat", "c")).is_none());
        assert_eq!(outcome_headline(&snapshot("cat", "cat")).unwrap().0, "You win!");
    }
}
