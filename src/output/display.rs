//! Display functions for line mode

use super::formatters::{available_letters, guessed_letters, masked_word, outcome_headline};
use crate::core::GameStatus;
use crate::session::Snapshot;
use colored::{ColoredString, Colorize};

/// Render the ladder with eliminated levels struck through
#[must_use]
pub fn ladder_line(snapshot: &Snapshot) -> String {
    snapshot
        .ladder
        .levels()
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let label = format!(" {} ", level.name);
            if snapshot.is_level_lost(i) {
                label.bright_black().strikethrough().to_string()
            } else {
                let (br, bg, bb) = level.background_rgb();
                let (fr, fg, fb) = level.foreground_rgb();
                label
                    .truecolor(fr, fg, fb)
                    .on_truecolor(br, bg, bb)
                    .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the state after an action
pub fn print_snapshot(snapshot: &Snapshot) {
    println!("\n{}", ladder_line(snapshot));
    println!("\n    {}\n", masked_word(snapshot).bright_white().bold());

    if let Some(message) = snapshot.farewell_message() {
        println!("{}", format!("  {message} 🫡").magenta().italic());
    } else if let Some(announcement) = snapshot.last_guess_announcement() {
        println!("  {}", announcement.green());
    }

    if !snapshot.guesses.is_empty() {
        println!("  Guessed: {}", guessed_letters(snapshot).bright_black());
    }
    if !snapshot.is_over() {
        println!(
            "  Attempts left: {}",
            remaining_colored(snapshot.remaining_guesses())
        );
        println!("  Letters left: {}", available_letters(snapshot).bright_black());
    }
}

fn remaining_colored(remaining: usize) -> ColoredString {
    let text = remaining.to_string();
    match remaining {
        0..=2 => text.red().bold(),
        3..=5 => text.yellow(),
        _ => text.green(),
    }
}

/// Print the win or loss banner
pub fn print_game_over(snapshot: &Snapshot) {
    let Some((title, subtitle)) = outcome_headline(snapshot) else {
        return;
    };

    let rule = "═".repeat(60);
    match snapshot.status {
        GameStatus::Won => {
            println!("\n{}", rule.bright_cyan());
            println!("  {}", format!("🎉 {title}").bright_green().bold());
            println!("  {}", subtitle.bright_white());
            println!(
                "  Found {} with {} wrong {}",
                snapshot.word.text().to_uppercase().bright_yellow().bold(),
                snapshot.wrong_guess_count,
                if snapshot.wrong_guess_count == 1 { "guess" } else { "guesses" }
            );
            println!("{}", rule.bright_cyan());
        }
        GameStatus::Lost => {
            println!("\n{}", rule.red());
            println!("  {}", title.bright_red().bold());
            println!("  {}", subtitle.bright_white());
            println!(
                "  The word was {}",
                snapshot.word.text().to_uppercase().bright_yellow().bold()
            );
            println!("{}", rule.red());
        }
        GameStatus::InProgress => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, SeverityLadder, Word};
    use crate::session::Session;

    #[test]
    fn ladder_line_lists_every_level() {
        let snapshot = Session::with_word(SeverityLadder::languages(), Word::new("cat").unwrap())
            .guess(Letter::try_from('x').unwrap())
            .snapshot();
        let line = ladder_line(&snapshot);
        for level in snapshot.ladder.levels() {
            assert!(line.contains(level.name), "missing {}", level.name);
        }
    }
}
