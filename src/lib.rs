//! Terminal Wordle
//!
//! A Wordle game for the terminal: six guesses, per-tile feedback with full
//! duplicate-letter handling, a keyboard that remembers what each letter
//! earned, and a word list where every entry carries a definition.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_play::core::Word;
//! use wordle_play::dictionary::{Dictionary, WordRecord};
//! use wordle_play::engine::Round;
//!
//! let records = vec![
//!     WordRecord::new(Word::new("apple").unwrap(), "a round fruit", "n."),
//!     WordRecord::new(Word::new("paper").unwrap(), "thin writing material", "n."),
//! ];
//! let dictionary = Dictionary::new(records).unwrap();
//!
//! let mut round = Round::new(dictionary.records()[0].clone(), 6);
//! let report = round.submit("paper", &dictionary).unwrap();
//! assert!(!report.won);
//! assert_eq!(round.attempts_left(), 5);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod engine;

// Word lists with definitions
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
