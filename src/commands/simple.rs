//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::{Letter, SeverityLadder};
use crate::output::{print_game_over, print_snapshot};
use crate::selector::WordSelector;
use crate::session::{Session, Statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use tracing::debug;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// selector cannot pick a new word.
pub fn run_simple<R: Rng>(ladder: SeverityLadder, selector: &mut WordSelector<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Assembly: Endgame                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        ladder.max_wrong_guesses()
    );
    println!("Type one letter per line. Commands: 'new' for a new game, 'quit' to exit.");

    let mut session = Session::start(ladder, selector);
    let mut stats = Statistics::default();
    print_snapshot(&session.snapshot());

    loop {
        let Some(input) = get_user_input("Letter")? else {
            println!();
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                print_farewell(&stats);
                return Ok(());
            }
            "new" => {
                session = session.new_game(selector)?;
                println!("\n🔄 New game started!");
                print_snapshot(&session.snapshot());
                continue;
            }
            _ => {}
        }

        session = match apply_guess(&session, &input) {
            Ok(next) => next,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        let snapshot = session.snapshot();
        print_snapshot(&snapshot);

        if snapshot.is_over() {
            stats.record(snapshot.status);
            print_game_over(&snapshot);

            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session = session.new_game(selector)?;
                println!("\n🔄 New game started!");
                print_snapshot(&session.snapshot());
            } else {
                print_farewell(&stats);
                return Ok(());
            }
        }
    }
}

/// Apply a typed guess, refusing input that is not a letter or was already ruled out
fn apply_guess(session: &Session, input: &str) -> Result<Session, String> {
    let letter = Letter::parse(input).map_err(|e| e.to_string())?;

    if session.snapshot().is_key_disabled(letter) {
        return Err(format!(
            "{} was already ruled out",
            letter.as_char().to_ascii_uppercase()
        ));
    }

    Ok(session.guess(letter))
}

fn print_farewell(stats: &Statistics) {
    if stats.games_played > 0 {
        println!(
            "\nPlayed {} • Won {} • Lost {}",
            stats.games_played, stats.games_won, stats.games_lost
        );
    }
    println!("\n👋 Thanks for playing!\n");
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    if read == 0 {
        debug!("stdin closed");
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session(word: &str) -> Session {
        Session::with_word(SeverityLadder::languages(), Word::new(word).unwrap())
    }

    #[test]
    fn apply_guess_records_letter() {
        let next = apply_guess(&session("cat"), "x").unwrap();
        assert_eq!(next.wrong_guess_count(), 1);
        assert!(next.is_farewell());
    }

    #[test]
    fn apply_guess_refuses_ruled_out_letter() {
        let missed = apply_guess(&session("cat"), "x").unwrap();
        let correct = apply_guess(&missed, "c").unwrap();

        assert_eq!(
            apply_guess(&correct, "x").unwrap_err(),
            "X was already ruled out"
        );
        // The latest action is still the correct guess, no second farewell
        assert!(!correct.is_farewell());
        assert_eq!(correct.wrong_guess_count(), 1);
    }

    #[test]
    fn apply_guess_allows_repeating_correct_letter() {
        let first = apply_guess(&session("cat"), "c").unwrap();
        let again = apply_guess(&first, "c").unwrap();
        assert_eq!(again.guesses(), first.guesses());
        assert!(!again.is_farewell());
    }

    #[test]
    fn apply_guess_rejects_non_letters() {
        let start = session("cat");
        assert!(apply_guess(&start, "7").is_err());
        assert!(apply_guess(&start, "ab").is_err());
    }
}
