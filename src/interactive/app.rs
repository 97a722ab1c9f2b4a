//! TUI application state and logic

use crate::core::{GameError, GameStatus, Letter, SeverityLadder};
use crate::output::formatters::outcome_headline;
use crate::selector::WordSelector;
use crate::session::{Session, Snapshot, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<R: Rng> {
    pub selector: WordSelector<R>,
    pub session: Session,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(ladder: SeverityLadder, mut selector: WordSelector<R>) -> Self {
        let session = Session::start(ladder, &mut selector);

        Self {
            selector,
            session,
            input_mode: InputMode::Guessing,
            messages: vec![Message {
                text: format!(
                    "Guess the word within {} attempts to keep the programming world safe from Assembly!",
                    ladder.max_wrong_guesses()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Feed a typed character to the session
    pub fn handle_char(&mut self, ch: char) {
        if self.input_mode == InputMode::GameOver {
            return;
        }

        let letter = match Letter::try_from(ch) {
            Ok(letter) => letter,
            Err(err) => {
                self.add_message(&GameError::from(err).to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.session.guesses().contains(letter) && !self.session.word().contains(letter) {
            self.add_message(
                &format!("{} was already ruled out", letter.as_char().to_ascii_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        self.session = self.session.guess(letter);
        let snapshot = self.session.snapshot();

        if snapshot.is_over() {
            self.stats.record(snapshot.status);
            self.input_mode = InputMode::GameOver;
            if let Some((title, subtitle)) = outcome_headline(&snapshot) {
                let style = if snapshot.status == GameStatus::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&format!("{title} {subtitle}"), style);
            }
            self.add_message("Press 'n' or Enter for a new game, Esc to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game(&mut self.selector) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                error!(%err, "could not start a new game");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Raw mode and the alternate screen are restored even when setup or the game
/// loop fails; the first error is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;

    let res = with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            with_restore(
                || {
                    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
                    let res = run_app(&mut terminal, app);
                    let shown = terminal.show_cursor();
                    res?;
                    shown?;
                    Ok(())
                },
                || execute!(io::stdout(), LeaveAlternateScreen),
            )
        },
        disable_raw_mode,
    );

    if let Err(err) = &res {
        error!(%err, "tui exited with error");
    }
    res
}

/// Run `body`, then `restore` whatever the outcome; the body's error wins
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                code => match app.input_mode {
                    InputMode::GameOver => match code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') | KeyCode::Enter => app.new_game(),
                        _ => {}
                    },
                    InputMode::Guessing => {
                        if let KeyCode::Char(ch) = code {
                            app.handle_char(ch);
                        }
                    }
                },
            }
        }

        if app.should_quit {
            info!(
                played = app.stats.games_played,
                won = app.stats.games_won,
                "leaving tui"
            );
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, Word};
    use crate::selector::RerollPolicy;
    use crate::wordlists::loader::words_from_slice;
    use rand::rngs::StdRng;

    fn app(words: &[&str], levels: usize) -> App<StdRng> {
        let ladder = SeverityLadder::new(&LANGUAGES[..levels]).unwrap();
        let selector = WordSelector::seeded(words_from_slice(words), RerollPolicy::Strict, 4)
            .unwrap();
        App::new(ladder, selector)
    }

    #[test]
    fn winning_switches_to_game_over() {
        let mut app = app(&["cat", "dog"], 9);
        let word: Vec<char> = app.session.word().text().chars().collect();
        for ch in word {
            app.handle_char(ch);
        }
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn invalid_key_reports_error_without_guessing() {
        let mut app = app(&["cat", "dog"], 9);
        app.handle_char('5');
        assert!(app.session.guesses().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn ruled_out_letter_not_replayed() {
        let mut app = app(&["cat", "dog"], 9);
        app.session = Session::with_word(*app.session.ladder(), Word::new("cat").unwrap());
        app.handle_char('x');
        app.handle_char('c');
        app.handle_char('x');
        // The second 'x' is refused, so the latest guess is still the correct 'c'
        assert!(!app.session.is_farewell());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn keys_ignored_after_game_over() {
        let mut app = app(&["cat", "dog"], 2);
        app.session = Session::with_word(*app.session.ladder(), Word::new("cat").unwrap());
        app.handle_char('x');
        assert_eq!(app.input_mode, InputMode::GameOver);
        let before = app.session.clone();
        app.handle_char('c');
        assert_eq!(app.session, before);
        assert_eq!(app.stats.games_lost, 1);
    }

    #[test]
    fn new_game_resets_mode_and_word() {
        let mut app = app(&["cat", "dog"], 2);
        let first = app.session.word().clone();
        app.handle_char('z');
        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_ne!(app.session.word(), &first);
        assert!(app.session.guesses().is_empty());
    }

    #[test]
    fn restore_runs_when_body_fails() {
        let restored = std::cell::Cell::new(false);
        let res: Result<()> = with_restore(
            || Err(anyhow::anyhow!("draw failed")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn body_error_wins_over_restore_error() {
        let res: Result<()> = with_restore(
            || Err(anyhow::anyhow!("draw failed")),
            || Err(io::Error::other("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_reported_after_success() {
        let res = with_restore(|| Ok(7), || Err(io::Error::other("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app(&["cat", "dog"], 9);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
