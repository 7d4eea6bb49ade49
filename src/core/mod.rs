//! Core domain types for the game
//!
//! Words, per-tile feedback, and accumulated per-letter knowledge. All types
//! here are pure, testable, and independent of any I/O or rendering concern.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{GuessFeedback, TileMark};
pub use knowledge::KeyKnowledge;
pub use word::{WORD_LENGTH, Word, WordError};
