//! Read-only view of a session
//!
//! Front-ends draw from a `Snapshot` and trigger actions on the `Session`; they
//! never edit snapshot fields back into the game.

use super::Session;
use crate::core::{GameStatus, GuessSet, Letter, SeverityLadder, SeverityLevel, Word, farewell_text};

/// Derived state after the latest action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub word: Word,
    pub guesses: GuessSet,
    pub status: GameStatus,
    pub wrong_guess_count: usize,
    pub is_farewell: bool,
    pub farewell_target: Option<&'static SeverityLevel>,
    pub last_guess: Option<Letter>,
    pub ladder: SeverityLadder,
}

/// How one position of the target word is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedLetter {
    /// Guessed by the player
    Revealed(Letter),
    /// Never guessed, uncovered because the game is over
    Missed(Letter),
    Hidden,
}

/// State of a key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

impl Snapshot {
    pub(super) fn of(session: &Session) -> Self {
        Self {
            word: session.word().clone(),
            guesses: session.guesses().clone(),
            status: session.status(),
            wrong_guess_count: session.wrong_guess_count(),
            is_farewell: session.is_farewell(),
            farewell_target: session.farewell_level(),
            last_guess: session.last_guess(),
            ladder: *session.ladder(),
        }
    }

    #[must_use]
    pub fn farewell_target_name(&self) -> Option<&'static str> {
        self.farewell_target.map(|level| level.name)
    }

    /// Farewell line for the level just lost, if the latest guess missed
    #[must_use]
    pub fn farewell_message(&self) -> Option<String> {
        self.farewell_target_name().map(farewell_text)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Wrong guesses the player can still afford
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.ladder
            .max_wrong_guesses()
            .saturating_sub(self.wrong_guess_count)
    }

    /// True once the level at `index` has been eliminated
    #[must_use]
    pub const fn is_level_lost(&self, index: usize) -> bool {
        self.wrong_guess_count > index
    }

    /// Every position of the word, masked according to the guesses
    #[must_use]
    pub fn revealed_letters(&self) -> Vec<RevealedLetter> {
        let over = self.is_over();
        self.word
            .letters()
            .map(|letter| {
                if self.guesses.contains(letter) {
                    RevealedLetter::Revealed(letter)
                } else if over {
                    RevealedLetter::Missed(letter)
                } else {
                    RevealedLetter::Hidden
                }
            })
            .collect()
    }

    #[must_use]
    pub fn key_state(&self, letter: Letter) -> KeyState {
        if !self.guesses.contains(letter) {
            KeyState::Unused
        } else if self.word.contains(letter) {
            KeyState::Correct
        } else {
            KeyState::Wrong
        }
    }

    /// Keys stay pressable until the game ends, except letters already missed
    #[must_use]
    pub fn is_key_disabled(&self, letter: Letter) -> bool {
        self.is_over() || self.key_state(letter) == KeyState::Wrong
    }

    /// Short status line about the latest guess, for screen readers and logs
    #[must_use]
    pub fn last_guess_announcement(&self) -> Option<String> {
        let letter = self.last_guess?;
        if self.word.contains(letter) {
            Some(format!("Correct: {} is in the word", letter.as_char().to_ascii_uppercase()))
        } else {
            let remaining = self.remaining_guesses();
            let plural = if remaining == 1 { "attempt" } else { "attempts" };
            Some(format!(
                "Wrong: {} is not in the word, you have {remaining} {plural} left",
                letter.as_char().to_ascii_uppercase()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;

    fn play(word: &str, levels: usize, letters: &str) -> Snapshot {
        let ladder = SeverityLadder::new(&LANGUAGES[..levels]).unwrap();
        letters
            .chars()
            .fold(
                Session::with_word(ladder, Word::new(word).unwrap()),
                |session, ch| session.guess(Letter::try_from(ch).unwrap()),
            )
            .snapshot()
    }

    fn letter(ch: char) -> Letter {
        Letter::try_from(ch).unwrap()
    }

    #[test]
    fn fresh_snapshot() {
        let snap = play("cat", 9, "");
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.wrong_guess_count, 0);
        assert!(!snap.is_farewell);
        assert!(snap.farewell_message().is_none());
        assert!(snap.last_guess_announcement().is_none());
        assert_eq!(snap.remaining_guesses(), 8);
    }

    #[test]
    fn farewell_message_names_lost_level() {
        let snap = play("cat", 9, "xq");
        assert_eq!(snap.farewell_target_name(), Some("CSS"));
        assert!(snap.farewell_message().unwrap().contains("CSS"));
    }

    #[test]
    fn lost_levels_follow_wrong_count() {
        let snap = play("cat", 9, "xcq");
        assert!(snap.is_level_lost(0));
        assert!(snap.is_level_lost(1));
        assert!(!snap.is_level_lost(2));
        assert_eq!(snap.remaining_guesses(), 6);
    }

    #[test]
    fn revealed_letters_mask_unguessed() {
        let snap = play("kettle", 9, "e");
        assert_eq!(
            snap.revealed_letters(),
            [
                RevealedLetter::Hidden,
                RevealedLetter::Revealed(letter('e')),
                RevealedLetter::Hidden,
                RevealedLetter::Hidden,
                RevealedLetter::Hidden,
                RevealedLetter::Revealed(letter('e')),
            ]
        );
    }

    #[test]
    fn revealed_letters_show_missed_after_loss() {
        let snap = play("cat", 2, "cx");
        assert_eq!(snap.status, GameStatus::Lost);
        assert_eq!(
            snap.revealed_letters(),
            [
                RevealedLetter::Revealed(letter('c')),
                RevealedLetter::Missed(letter('a')),
                RevealedLetter::Missed(letter('t')),
            ]
        );
    }

    #[test]
    fn key_states() {
        let snap = play("cat", 9, "cx");
        assert_eq!(snap.key_state(letter('c')), KeyState::Correct);
        assert_eq!(snap.key_state(letter('x')), KeyState::Wrong);
        assert_eq!(snap.key_state(letter('a')), KeyState::Unused);

        assert!(!snap.is_key_disabled(letter('c')));
        assert!(snap.is_key_disabled(letter('x')));
        assert!(!snap.is_key_disabled(letter('a')));
    }

    #[test]
    fn all_keys_disabled_once_over() {
        let snap = play("cat", 9, "cat");
        assert!(Letter::alphabet().all(|l| snap.is_key_disabled(l)));
    }

    #[test]
    fn announcements() {
        let correct = play("cat", 9, "c");
        assert_eq!(
            correct.last_guess_announcement().unwrap(),
            "Correct: C is in the word"
        );

        let wrong = play("cat", 3, "x");
        assert_eq!(
            wrong.last_guess_announcement().unwrap(),
            "Wrong: X is not in the word, you have 1 attempt left"
        );
    }
}
