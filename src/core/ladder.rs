//! Severity ladder
//!
//! The ordered list of "lives". Each wrong guess consumes the next level and the
//! game is lost once only the last level is left standing.

use super::error::ConfigurationError;

/// One rung of the ladder with its display identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityLevel {
    /// Stable name, also the farewell lookup key
    pub name: &'static str,
    /// Background colour as `#RRGGBB`
    pub background: &'static str,
    /// Foreground colour as `#RRGGBB`
    pub foreground: &'static str,
}

impl SeverityLevel {
    #[must_use]
    pub const fn new(name: &'static str, background: &'static str, foreground: &'static str) -> Self {
        Self {
            name,
            background,
            foreground,
        }
    }

    /// Background colour as RGB components
    #[must_use]
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        parse_hex(self.background)
    }

    /// Foreground colour as RGB components
    #[must_use]
    pub fn foreground_rgb(&self) -> (u8, u8, u8) {
        parse_hex(self.foreground)
    }
}

/// The default ladder, eliminated left to right until only Assembly remains
pub const LANGUAGES: &[SeverityLevel] = &[
    SeverityLevel::new("HTML", "#E2680F", "#F9F4DA"),
    SeverityLevel::new("CSS", "#328AF1", "#F9F4DA"),
    SeverityLevel::new("JavaScript", "#F4EB13", "#1E1E1E"),
    SeverityLevel::new("React", "#2ED3E9", "#1E1E1E"),
    SeverityLevel::new("TypeScript", "#298EC6", "#F9F4DA"),
    SeverityLevel::new("Node.js", "#599137", "#F9F4DA"),
    SeverityLevel::new("Python", "#FFD742", "#1E1E1E"),
    SeverityLevel::new("Ruby", "#D02B2B", "#F9F4DA"),
    SeverityLevel::new("Assembly", "#2D519F", "#F9F4DA"),
];

/// Ordered, fixed-length list of at least two levels
///
/// A ladder of N levels tolerates N - 1 wrong guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityLadder {
    levels: &'static [SeverityLevel],
}

impl SeverityLadder {
    /// Build a ladder from static level data
    ///
    /// # Errors
    /// Returns `ConfigurationError::LadderTooShort` for fewer than 2 levels,
    /// which would leave no wrong guess to spend.
    pub const fn new(levels: &'static [SeverityLevel]) -> Result<Self, ConfigurationError> {
        if levels.len() < 2 {
            return Err(ConfigurationError::LadderTooShort {
                levels: levels.len(),
            });
        }
        Ok(Self { levels })
    }

    /// The programming-language ladder
    #[must_use]
    pub const fn languages() -> Self {
        Self { levels: LANGUAGES }
    }

    /// Number of levels (N)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.levels.len()
    }

    /// Never true; construction rejects short ladders
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Wrong guesses that end the game (N - 1)
    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.levels.len() - 1
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static SeverityLevel> {
        self.levels.get(index)
    }

    #[inline]
    #[must_use]
    pub const fn levels(&self) -> &'static [SeverityLevel] {
        self.levels
    }
}

impl Default for SeverityLadder {
    fn default() -> Self {
        Self::languages()
    }
}

fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT: &[SeverityLevel] = &[SeverityLevel::new("Only", "#000000", "#FFFFFF")];

    #[test]
    fn languages_ladder_shape() {
        let ladder = SeverityLadder::languages();
        assert_eq!(ladder.len(), 9);
        assert_eq!(ladder.max_wrong_guesses(), 8);
        assert_eq!(ladder.get(0).unwrap().name, "HTML");
        assert_eq!(ladder.get(8).unwrap().name, "Assembly");
        assert!(ladder.get(9).is_none());
    }

    #[test]
    fn ladder_names_are_unique() {
        let mut names: Vec<_> = LANGUAGES.iter().map(|level| level.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LANGUAGES.len());
    }

    #[test]
    fn short_ladder_rejected() {
        assert_eq!(
            SeverityLadder::new(SHORT),
            Err(ConfigurationError::LadderTooShort { levels: 1 })
        );
        assert_eq!(
            SeverityLadder::new(&[]),
            Err(ConfigurationError::LadderTooShort { levels: 0 })
        );
    }

    #[test]
    fn two_level_ladder_allowed() {
        let ladder = SeverityLadder::new(&LANGUAGES[..2]).unwrap();
        assert_eq!(ladder.max_wrong_guesses(), 1);
    }

    #[test]
    fn hex_colours_parse() {
        let html = LANGUAGES[0];
        assert_eq!(html.background_rgb(), (0xE2, 0x68, 0x0F));
        assert_eq!(html.foreground_rgb(), (0xF9, 0xF4, 0xDA));
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        let level = SeverityLevel::new("Odd", "#zz", "");
        assert_eq!(level.background_rgb(), (0, 0, 0));
        assert_eq!(level.foreground_rgb(), (0, 0, 0));
    }
}
