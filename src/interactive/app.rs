//! TUI session state and event handling

use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;
use crate::engine::Round;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient message stays on screen
const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// How long to wait for input before redrawing
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// State for one interactive session: current round, pending input,
/// transient messages, and running statistics
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub round: Round,
    pub max_attempts: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    posted: Instant,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by attempts used; slot 0 stays empty
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts + 1],
        }
    }

    /// Fold a finished round into the session totals
    pub fn record(&mut self, round: &Round) {
        self.total_games += 1;
        if round.is_won() {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(round.attempts_used()) {
                *slot += 1;
            }
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng, max_attempts: usize) -> Self {
        let round = Round::start(dictionary, &mut rng, max_attempts);
        log::debug!("target word: {}", round.target().word());

        let mut app = Self {
            dictionary,
            round,
            max_attempts,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::new(max_attempts),
            should_quit: false,
            rng,
        };

        app.add_message(
            "Welcome! Type a 5-letter word and press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Start a fresh round, keeping the session statistics
    pub fn new_round(&mut self) {
        self.round = Round::start(self.dictionary, &mut self.rng, self.max_attempts);
        log::debug!("target word: {}", self.round.target().word());

        self.input_buffer.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    /// Append a typed letter to the pending guess
    pub fn push_letter(&mut self, c: char) {
        if !self.round.is_over() && self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the pending guess to the round
    pub fn submit_current(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Not enough letters!", MessageStyle::Error);
            return;
        }

        let entry = self.input_buffer.clone();
        match self.round.submit(&entry, self.dictionary) {
            Ok(report) => {
                self.input_buffer.clear();

                if report.round_over {
                    self.stats.record(&self.round);

                    if report.won {
                        let celebration = match self.round.attempts_used() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            6 => "😅 PHEW! Got it in six! 😅",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else {
                        self.add_message("❌ Out of guesses!", MessageStyle::Error);
                    }

                    let reveal = format!("The word was: {}", self.round.target());
                    self.add_message(&reveal, MessageStyle::Info);
                }
            }
            // Keep the typed letters so they can be edited
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            posted: Instant::now(),
        });

        // Cap the backlog at five entries
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop messages older than their display window
    pub fn prune_messages(&mut self) {
        self.messages
            .retain(|message| message.posted.elapsed() < MESSAGE_TTL);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or restored, or when
/// drawing or reading events fails.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.prune_messages();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so expired messages disappear without input
        if event::poll(EVENT_POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.round.is_over() {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_round();
                        }
                        _ => {
                            // Between rounds, ignore other keys
                        }
                    }
                } else {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Enter => {
                            app.submit_current();
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            app.push_letter(c);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
