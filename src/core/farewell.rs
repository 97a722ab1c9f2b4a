//! Farewell messages
//!
//! A wrong guess says goodbye to the level it just consumed.

use super::ladder::{SeverityLadder, SeverityLevel};
use super::letter::Letter;
use super::word::Word;

/// Message templates, `{}` is replaced with the level name
pub const FAREWELL_TEMPLATES: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// True when `letter` is not part of `word`
#[inline]
#[must_use]
pub fn is_farewell(letter: Letter, word: &Word) -> bool {
    !word.contains(letter)
}

/// Fixed farewell phrase for a level name
///
/// The template is picked by a stable hash of the name, so a name always maps
/// to the same phrase.
///
/// # Examples
/// ```
/// use assembly_endgame::core::farewell_text;
///
/// let text = farewell_text("Ruby");
/// assert!(text.contains("Ruby"));
/// assert_eq!(text, farewell_text("Ruby"));
/// ```
#[must_use]
pub fn farewell_text(name: &str) -> String {
    let hash = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    FAREWELL_TEMPLATES[hash % FAREWELL_TEMPLATES.len()].replace("{}", name)
}

/// The level a farewell refers to
///
/// `wrong_count` must already include the guess being reported, so the level
/// at `wrong_count - 1` is the one just lost. Returns `None` when nothing has
/// been lost yet.
#[must_use]
pub fn farewell_for(ladder: &SeverityLadder, wrong_count: usize) -> Option<&'static SeverityLevel> {
    let index = wrong_count.checked_sub(1)?;
    debug_assert!(
        index < ladder.max_wrong_guesses(),
        "farewell index {index} past the last losable level"
    );
    ladder.get(index)
}
