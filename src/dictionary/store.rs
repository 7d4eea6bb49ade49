//! In-memory dictionary with validity checking and target selection

use std::fmt;
use std::io;

use rand::Rng;
use rustc_hash::FxHashSet;

use super::WordRecord;
use crate::core::Word;

/// The pool of playable words for a game
///
/// Holds the full records for target selection and reveal, plus a hash set
/// of their words for O(1) guess validation. Guesses are valid exactly when
/// they appear in the loaded list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    records: Vec<WordRecord>,
    valid: FxHashSet<Word>,
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io(io::Error),
    /// The word list was not valid JSON in the expected shape
    Parse(serde_json::Error),
    /// No entry survived validation
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "word list unavailable: {err}"),
            Self::Parse(err) => write!(f, "word list malformed: {err}"),
            Self::Empty => write!(f, "word list contains no playable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Dictionary {
    /// Build a dictionary from validated records
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `records` is empty. A dictionary
    /// always holds at least one word, so target selection cannot fail.
    pub fn new(records: Vec<WordRecord>) -> Result<Self, DictionaryError> {
        if records.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let valid = records.iter().map(|record| record.word().clone()).collect();

        Ok(Self { records, valid })
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dictionary holds no words
    ///
    /// Always false for a constructed dictionary; provided alongside `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether a word may be played as a guess
    #[inline]
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// All records in load order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Draw a uniformly random target record
    ///
    /// Callers pass the generator, so a seeded one reproduces the same
    /// sequence of targets run after run.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordRecord {
        let index = rng.random_range(0..self.records.len());
        &self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_dictionary() -> Dictionary {
        let records = ["apple", "paper", "robot", "ozone", "crane"]
            .iter()
            .map(|&text| WordRecord::new(Word::new(text).unwrap(), "a thing", "n."))
            .collect();
        Dictionary::new(records).unwrap()
    }

    #[test]
    fn empty_record_list_rejected() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn validity_follows_loaded_records() {
        let dictionary = sample_dictionary();

        assert!(dictionary.is_valid(&Word::new("apple").unwrap()));
        assert!(dictionary.is_valid(&Word::new("ozone").unwrap()));
        assert!(!dictionary.is_valid(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn len_counts_records() {
        let dictionary = sample_dictionary();
        assert_eq!(dictionary.len(), 5);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn pick_target_is_reproducible_with_seed() {
        let dictionary = sample_dictionary();

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(
                dictionary.pick_target(&mut rng1),
                dictionary.pick_target(&mut rng2)
            );
        }
    }

    #[test]
    fn pick_target_returns_playable_word() {
        let dictionary = sample_dictionary();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let record = dictionary.pick_target(&mut rng);
            assert!(dictionary.is_valid(record.word()));
        }
    }

    #[test]
    fn pick_target_reaches_every_record() {
        let dictionary = sample_dictionary();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(dictionary.pick_target(&mut rng).word().text().to_string());
        }
        assert_eq!(seen.len(), dictionary.len());
    }
}
