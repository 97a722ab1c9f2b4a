//! TUI rendering with ratatui
//!
//! Visualizations for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, Letter};
use crate::session::{KeyState, RevealedLetter, Snapshot};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Farewell + outcome
            Constraint::Length(4), // Ladder
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Min(5),    // Lives + messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_banner(f, &snapshot, chunks[1]);
    render_ladder(f, &snapshot, chunks[2]);
    render_word(f, &snapshot, chunks[3]);
    render_keyboard(f, &snapshot, chunks[4]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[5]);
    render_lives(f, &snapshot, lower[0]);
    render_messages(f, app, lower[1]);

    render_status(f, app, &snapshot, chunks[6]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Assembly: Endgame")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    // The guess that ends the game can also be a farewell, so both lines show
    let farewell = snapshot.farewell_message().map_or_else(Line::default, |message| {
        Line::from(Span::styled(
            format!("\"{message}\" 🫡"),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ))
    });

    let outcome = match snapshot.status {
        GameStatus::Won => Line::from(Span::styled(
            "You win! Well done! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        GameStatus::Lost => Line::from(Span::styled(
            "Game over! You lose! Better start learning Assembly 😭",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        GameStatus::InProgress => Line::default(),
    };

    let banner = Paragraph::new(vec![farewell, outcome])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, area);
}

fn hex_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_ladder(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let spans: Vec<Span> = snapshot
        .ladder
        .levels()
        .iter()
        .enumerate()
        .flat_map(|(i, level)| {
            let chip = if snapshot.is_level_lost(i) {
                Span::styled(
                    format!(" 💀 {} ", level.name),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                Span::styled(
                    format!(" {} ", level.name),
                    Style::default()
                        .fg(hex_color(level.foreground_rgb()))
                        .bg(hex_color(level.background_rgb()))
                        .add_modifier(Modifier::BOLD),
                )
            };
            [chip, Span::raw(" ")]
        })
        .collect();

    let ladder = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Languages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(ladder, area);
}

fn render_word(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let spans: Vec<Span> = snapshot
        .revealed_letters()
        .into_iter()
        .map(|slot| match slot {
            RevealedLetter::Revealed(letter) => Span::styled(
                format!(" {} ", letter.as_char().to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            RevealedLetter::Missed(letter) => Span::styled(
                format!(" {} ", letter.as_char().to_ascii_uppercase()),
                Style::default().fg(Color::Red).bg(Color::DarkGray),
            ),
            RevealedLetter::Hidden => {
                Span::styled(" _ ", Style::default().fg(Color::Gray).bg(Color::DarkGray))
            }
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Word "));
    f.render_widget(word, area);
}

fn key_span(snapshot: &Snapshot, letter: Letter) -> Span<'static> {
    let label = format!(" {} ", letter.as_char().to_ascii_uppercase());
    let style = match snapshot.key_state(letter) {
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::Wrong => Style::default().fg(Color::Black).bg(Color::Red),
        KeyState::Unused if snapshot.is_key_disabled(letter) => {
            Style::default().fg(Color::DarkGray)
        }
        KeyState::Unused => Style::default().fg(Color::Black).bg(Color::Yellow),
    };
    Span::styled(label, style)
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let letters: Vec<Letter> = Letter::alphabet().collect();
    let lines: Vec<Line> = letters
        .chunks(13)
        .map(|row| {
            Line::from(
                row.iter()
                    .flat_map(|&letter| [key_span(snapshot, letter), Span::raw(" ")])
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_lives(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let max = snapshot.ladder.max_wrong_guesses();
    let remaining = snapshot.remaining_guesses();
    let percent = (remaining * 100 / max.max(1)) as u16;
    let color = match percent {
        0..=25 => Color::Red,
        26..=60 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let last = Paragraph::new(snapshot.last_guess_announcement().unwrap_or_default())
        .alignment(Alignment::Center);
    f.render_widget(last, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Lost: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.games_won,
        app.stats.games_lost,
        app.stats.win_rate() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "n/Enter: New Game | q/Esc: Quit",
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
