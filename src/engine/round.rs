//! A single round of the game

use std::fmt;

use rand::Rng;

use crate::core::{GuessFeedback, KeyKnowledge, WORD_LENGTH, Word, WordError};
use crate::dictionary::{Dictionary, WordRecord};

/// Error type for rejected guesses
///
/// A rejected guess consumes no attempt and leaves the round unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The round has already been won or lost
    RoundAlreadyOver,
    /// The guess was not exactly 5 letters
    InvalidLength(usize),
    /// The guess is not a playable word
    NotInDictionary(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundAlreadyOver => {
                write!(f, "round is already over; start a new round to keep playing")
            }
            Self::InvalidLength(len) => {
                write!(f, "guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: GuessFeedback,
}

impl GuessRecord {
    /// The guessed word, normalized to lowercase
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The per-tile feedback the guess earned
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &GuessFeedback {
        &self.feedback
    }
}

/// Outcome of one accepted guess
///
/// `revealed` carries the target record exactly when this guess ended the
/// round, won or lost, so callers can show the word and its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// The guessed word, normalized to lowercase
    pub word: Word,
    /// Per-tile feedback for this guess
    pub feedback: GuessFeedback,
    /// Whether this guess ended the round
    pub round_over: bool,
    /// Whether this guess won the round
    pub won: bool,
    /// The target record, present only when the round just ended
    pub revealed: Option<WordRecord>,
}

/// State of a single round
///
/// Created with a target and an attempt budget, then fed guesses until the
/// target is hit or the budget runs out. Rejected guesses never consume an
/// attempt.
#[derive(Debug, Clone)]
pub struct Round {
    target: WordRecord,
    max_attempts: usize,
    attempts_used: usize,
    won: bool,
    over: bool,
    history: Vec<GuessRecord>,
    knowledge: KeyKnowledge,
}

impl Round {
    /// Create a round against a known target
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero.
    #[must_use]
    pub fn new(target: WordRecord, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "a round needs at least one attempt");
        Self {
            target,
            max_attempts,
            attempts_used: 0,
            won: false,
            over: false,
            history: Vec::with_capacity(max_attempts),
            knowledge: KeyKnowledge::new(),
        }
    }

    /// Start a round against a randomly drawn target
    ///
    /// A seeded generator reproduces the same sequence of targets run after
    /// run.
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        rng: &mut R,
        max_attempts: usize,
    ) -> Self {
        let target = dictionary.pick_target(rng).clone();
        Self::new(target, max_attempts)
    }

    /// Play one guess
    ///
    /// The input is normalized to lowercase, then validated for length and
    /// dictionary membership before it costs an attempt. An accepted guess
    /// is scored, folded into the letter knowledge, and recorded in the
    /// history; if it hits the target or exhausts the budget, the round
    /// ends and the report carries the revealed target.
    ///
    /// # Errors
    /// - `GuessError::RoundAlreadyOver` if the round has ended
    /// - `GuessError::InvalidLength` if the input is not 5 characters
    /// - `GuessError::NotInDictionary` if the word is not playable
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::Word;
    /// use wordle_play::dictionary::{Dictionary, WordRecord};
    /// use wordle_play::engine::Round;
    ///
    /// let records = vec![
    ///     WordRecord::new(Word::new("apple").unwrap(), "a round fruit", "n."),
    ///     WordRecord::new(Word::new("paper").unwrap(), "thin writing material", "n."),
    /// ];
    /// let dictionary = Dictionary::new(records).unwrap();
    /// let target = dictionary.records()[0].clone();
    ///
    /// let mut round = Round::new(target, 6);
    /// let report = round.submit("paper", &dictionary).unwrap();
    /// assert!(!report.won);
    /// assert_eq!(round.attempts_used(), 1);
    /// ```
    pub fn submit(
        &mut self,
        raw_guess: &str,
        dictionary: &Dictionary,
    ) -> Result<GuessReport, GuessError> {
        if self.over {
            return Err(GuessError::RoundAlreadyOver);
        }

        let word = Word::new(raw_guess).map_err(|err| match err {
            WordError::InvalidLength(len) => GuessError::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => {
                GuessError::NotInDictionary(raw_guess.to_lowercase())
            }
        })?;

        if !dictionary.is_valid(&word) {
            return Err(GuessError::NotInDictionary(word.text().to_string()));
        }

        let feedback = GuessFeedback::calculate(&word, self.target.word());
        self.knowledge.absorb(&word, &feedback, self.target.word());

        self.attempts_used += 1;
        if feedback.is_winning() {
            self.won = true;
            self.over = true;
        } else if self.attempts_used >= self.max_attempts {
            self.over = true;
        }

        self.history.push(GuessRecord {
            word: word.clone(),
            feedback,
        });

        Ok(GuessReport {
            word,
            feedback,
            round_over: self.over,
            won: self.won,
            revealed: self.over.then(|| self.target.clone()),
        })
    }

    /// The target record
    ///
    /// Available at any time; the play surfaces only reveal it once the
    /// round ends.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &WordRecord {
        &self.target
    }

    /// Attempts consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// The attempt budget for this round
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.max_attempts - self.attempts_used
    }

    /// Whether the round has ended, won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the target was hit
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Accepted guesses in play order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Best known mark per guessed letter
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &KeyKnowledge {
        &self.knowledge
    }
}
