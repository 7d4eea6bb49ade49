//! Definition-annotated word lists
//!
//! A dictionary provides the pool of playable words: targets are drawn from
//! it and guesses are checked against it. Every entry carries a definition
//! and part of speech, revealed when a round ends.

pub mod loader;
mod record;
mod store;

pub use record::WordRecord;
pub use store::{Dictionary, DictionaryError};
