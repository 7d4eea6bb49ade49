//! Frame layout and widget rendering for the play interface
//!
//! Board, keyboard, messages, input banner, and status bar.

use super::app::{App, Message, MessageStyle};
use crate::core::{TileMark, WORD_LENGTH};
use crate::engine::GuessRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Draw one full frame
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Guess the Word")
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

fn tile_style(mark: TileMark) -> Style {
    match mark {
        TileMark::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        TileMark::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        TileMark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::new();
    for (&letter, &mark) in record.word().letters().iter().zip(record.feedback().marks()) {
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase() as char),
            tile_style(mark),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_line(buffer: &str) -> Line<'static> {
    let typed: Vec<char> = buffer.chars().collect();
    let mut spans = Vec::new();
    for i in 0..WORD_LENGTH {
        let span = match typed.get(i) {
            Some(&c) => Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    let mut spans = Vec::new();
    for _ in 0..WORD_LENGTH {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];

    for record in app.round.history() {
        lines.push(guess_line(record));
        lines.push(Line::default());
    }

    let mut rows_shown = app.round.history().len();
    if !app.round.is_over() {
        lines.push(input_line(&app.input_buffer));
        lines.push(Line::default());
        rows_shown += 1;
    }

    for _ in rows_shown..app.max_attempts {
        lines.push(empty_line());
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, &app.messages, chunks[1]);
}

fn key_style(app: &App, letter: u8) -> Style {
    match app.round.knowledge().status(letter) {
        Some(TileMark::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(TileMark::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(TileMark::Absent) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.bytes() {
                spans.push(Span::styled(
                    format!("{} ", letter.to_ascii_uppercase() as char),
                    key_style(app, letter),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.round.is_over() {
        if app.round.is_won() {
            (
                " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new round or 'q' to quit ",
                String::new(),
                Color::Green,
            )
        } else {
            (
                " Round over | Press 'n' for new round or 'q' to quit ",
                String::new(),
                Color::Red,
            )
        }
    } else {
        (
            " Type a 5-letter word | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt: {}/{}",
        app.round.attempts_used(),
        app.round.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words: {}", app.dictionary.len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = if app.round.is_over() {
        "n: New Round | q: Quit"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Erase"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
