//! Game status evaluation
//!
//! Status is always derived from the word, the guesses and the ladder size. It is
//! never stored.

use super::guesses::GuessSet;
use super::word::Word;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Evaluate the status of a game
///
/// A win is checked before a loss, so the guess that completes the word wins
/// even if it coincides with the last life. The loss check uses `>=` so that
/// guess sets built outside a session cannot skip past the ladder bound.
///
/// # Examples
/// ```
/// use assembly_endgame::core::{GameStatus, GuessSet, Letter, Word, evaluate};
///
/// let word = Word::new("cat").unwrap();
/// let guesses: GuessSet = "xyz".chars().map(|c| Letter::try_from(c).unwrap()).collect();
/// assert_eq!(evaluate(&word, &guesses, 4), GameStatus::Lost);
/// assert_eq!(evaluate(&word, &guesses, 5), GameStatus::InProgress);
/// ```
#[must_use]
pub fn evaluate(word: &Word, guesses: &GuessSet, ladder_size: usize) -> GameStatus {
    let wrong = guesses.wrong_count(word);

    if guesses.covers(word) {
        GameStatus::Won
    } else if wrong >= ladder_size.saturating_sub(1) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn guesses(letters: &str) -> GuessSet {
        letters
            .chars()
            .map(|ch| Letter::try_from(ch).unwrap())
            .collect()
    }

    #[test]
    fn empty_guesses_in_progress() {
        let word = Word::new("cat").unwrap();
        assert_eq!(evaluate(&word, &guesses(""), 4), GameStatus::InProgress);
    }

    #[test]
    fn all_correct_letters_win() {
        let word = Word::new("kettle").unwrap();
        assert_eq!(evaluate(&word, &guesses("ltek"), 9), GameStatus::Won);
    }

    #[test]
    fn correct_letters_in_any_order_win_for_every_word() {
        for text in ["a", "cat", "bitter", "committee", "rhythm"] {
            let word = Word::new(text).unwrap();
            let mut letters: Vec<char> = text.chars().collect();
            letters.reverse();
            let set: GuessSet = letters
                .into_iter()
                .map(|ch| Letter::try_from(ch).unwrap())
                .collect();
            assert_eq!(evaluate(&word, &set, 9), GameStatus::Won, "word {text}");
        }
    }

    #[test]
    fn ladder_minus_one_wrong_letters_lose() {
        let word = Word::new("cat").unwrap();
        assert_eq!(evaluate(&word, &guesses("xy"), 4), GameStatus::InProgress);
        assert_eq!(evaluate(&word, &guesses("xyz"), 4), GameStatus::Lost);
        assert_eq!(evaluate(&word, &guesses("cxyz"), 4), GameStatus::Lost);
    }

    #[test]
    fn two_level_ladder_loses_on_first_miss() {
        let word = Word::new("cat").unwrap();
        assert_eq!(evaluate(&word, &guesses("x"), 2), GameStatus::Lost);
    }

    #[test]
    fn win_takes_precedence_over_loss() {
        let word = Word::new("cat").unwrap();
        // Three wrong letters would exhaust a 4-level ladder, but the word is complete
        assert_eq!(evaluate(&word, &guesses("xyzcat"), 4), GameStatus::Won);
    }

    #[test]
    fn excess_wrong_guesses_still_lost() {
        let word = Word::new("cat").unwrap();
        assert_eq!(evaluate(&word, &guesses("qwxyz"), 4), GameStatus::Lost);
    }

    #[test]
    fn status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
