//! Guessed-letter tracking
//!
//! The guess set only grows within a session. There is no removal operation.

use super::letter::Letter;
use super::word::Word;

/// Letters chosen by the player this session, in the order they were chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    letters: Vec<Letter>,
}

impl GuessSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Return a set with `letter` added
    ///
    /// Recording a letter that is already present returns an identical set.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{GuessSet, Letter};
    ///
    /// let a = Letter::try_from('a').unwrap();
    /// let once = GuessSet::new().record(a);
    /// assert_eq!(once.record(a), once);
    /// ```
    #[must_use]
    pub fn record(&self, letter: Letter) -> Self {
        if self.contains(letter) {
            return self.clone();
        }

        let mut letters = self.letters.clone();
        letters.push(letter);
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Guessed letters in the order they were first chosen
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    /// Count of guessed letters that do not occur in `word`
    #[must_use]
    pub fn wrong_count(&self, word: &Word) -> usize {
        self.iter().filter(|&letter| !word.contains(letter)).count()
    }

    /// True when every letter of `word` has been guessed
    #[must_use]
    pub fn covers(&self, word: &Word) -> bool {
        word.letters().all(|letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for GuessSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, letter| set.record(letter))
    }
}
