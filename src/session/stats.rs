//! Session statistics
//!
//! Counts finished games across new-game resets within one process.

use crate::core::GameStatus;

/// Running tally of finished games in this process
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl Statistics {
    /// Count a finished game; in-progress statuses are ignored
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.games_lost += 1;
            }
            GameStatus::InProgress => {}
        }
    }

    /// Share of games won, 0 when nothing has been played
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }
}
