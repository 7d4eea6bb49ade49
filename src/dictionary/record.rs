//! A playable word with its dictionary entry

use std::fmt;

use crate::core::Word;

/// A word together with its definition and part of speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    word: Word,
    definition: String,
    part_of_speech: String,
}

impl WordRecord {
    /// Create a record from a validated word and its annotations
    #[must_use]
    pub fn new(
        word: Word,
        definition: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        Self {
            word,
            definition: definition.into(),
            part_of_speech: part_of_speech.into(),
        }
    }

    /// Get the word itself
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Get the definition text
    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Get the part of speech label, such as "n." or "v."
    #[inline]
    #[must_use]
    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }
}

/// Reveal format used at the end of a round: `APPLE (a round fruit [n.])`
impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} [{}])",
            self.word.text().to_uppercase(),
            self.definition,
            self.part_of_speech
        )
    }
}
