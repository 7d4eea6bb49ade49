//! Validated word type
//!
//! Every playable word is exactly five lowercase ASCII letters. `Word` keeps
//! the text alongside a fixed byte array so feedback scoring never re-walks
//! the string.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every playable word.
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Rejection reasons for [`Word::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must be plain ASCII"),
            Self::InvalidCharacters => write!(f, "word may only contain letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and normalize a candidate word
    ///
    /// Input is lowercased first, so `"PAPER"` and `"paper"` produce equal
    /// values.
    ///
    /// # Errors
    /// - `InvalidLength` when the input is not 5 characters (characters,
    ///   not bytes, so multi-byte input reports its visible length)
    /// - `NonAscii` for 5-character input outside ASCII
    /// - `InvalidCharacters` for ASCII input with digits or punctuation
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::Word;
    ///
    /// let word = Word::new("Paper").unwrap();
    /// assert_eq!(word.text(), "paper");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length and
    /// ASCII validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let char_len = text.chars().count();
        if char_len != WORD_LENGTH {
            return Err(WordError::InvalidLength(char_len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Safe to unwrap: 5 ASCII chars means exactly 5 bytes
        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, letters })
    }

    /// The word as text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// The letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Whether the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Per-letter multiplicities, the pool feedback scoring draws from
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
