//! Assembly Endgame - CLI
//!
//! Word guessing game with TUI and line modes. Every wrong letter costs a
//! programming language; lose them all and only Assembly is left.

use anyhow::{Context, Result, bail};
use assembly_endgame::{
    commands::run_simple,
    core::{SeverityLadder, Word},
    interactive::{App, run_tui},
    selector::{RerollPolicy, WordSelector},
    utils::init_logger,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language falls to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded corpus)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible word picks
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Fail instead of repeating the word when the corpus has a single entry
    #[arg(long, global = true)]
    strict_reroll: bool,

    /// Log debug events
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,
}

/// Load the corpus from `--words`, or the embedded list
fn load_corpus(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        bail!("Word list contains no valid words");
    }
    Ok(words)
}

fn build_selector(cli: &Cli) -> Result<WordSelector> {
    let corpus = load_corpus(cli.words.as_deref())?;
    let policy = if cli.strict_reroll {
        RerollPolicy::Strict
    } else {
        RerollPolicy::AllowRepeat
    };

    let selector = match cli.seed {
        Some(seed) => WordSelector::seeded(corpus, policy, seed)?,
        None => WordSelector::new(corpus, policy)?,
    };

    selector
        .ensure_rerollable()
        .context("--strict-reroll needs at least two distinct words")?;
    Ok(selector)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        // Stderr output would tear the TUI, so it only logs to a file
        Commands::Play => {
            if let Some(path) = cli.log_file.as_deref() {
                init_logger(cli.verbose, Some(path))?;
            }
        }
        Commands::Simple => init_logger(cli.verbose, cli.log_file.as_deref())?,
    }

    let selector = build_selector(&cli)?;
    let ladder = SeverityLadder::languages();
    info!(words = selector.len(), levels = ladder.len(), "starting");

    match command {
        Commands::Play => run_tui(App::new(ladder, selector)),
        Commands::Simple => {
            let mut selector = selector;
            run_simple(ladder, &mut selector)
        }
    }
}
