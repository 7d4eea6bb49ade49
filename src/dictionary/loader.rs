//! Word list loading
//!
//! Loads definition-annotated word lists from JSON: either the starter list
//! compiled into the binary or a file supplied on the command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Dictionary, DictionaryError, WordRecord};
use crate::core::Word;

/// Embedded starter word list
pub const STARTER: &str = include_str!("../../data/starter_words.json");

/// On-disk record shape before validation
///
/// The aliases accept older lists that used `definition_zh` and `pos` as
/// field names.
#[derive(Debug, Deserialize)]
struct RawRecord {
    word: String,
    #[serde(alias = "definition_zh")]
    definition: String,
    #[serde(alias = "pos")]
    part_of_speech: String,
}

fn records_from_raw(raw: Vec<RawRecord>) -> Vec<WordRecord> {
    raw.into_iter()
        .filter_map(|entry| match Word::new(&entry.word) {
            Ok(word) => Some(WordRecord::new(word, entry.definition, entry.part_of_speech)),
            Err(err) => {
                log::warn!("skipping word list entry {:?}: {err}", entry.word);
                None
            }
        })
        .collect()
}

/// Parse a dictionary from JSON text
///
/// Entries that fail word validation are skipped with a warning rather than
/// failing the whole load.
///
/// # Errors
/// Returns `DictionaryError` if the JSON is malformed or no entry survives
/// validation.
pub fn load_from_str(json: &str) -> Result<Dictionary, DictionaryError> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    Dictionary::new(records_from_raw(raw))
}

/// Load a dictionary from a JSON file
///
/// # Errors
/// Returns `DictionaryError` if the file cannot be read, the JSON is
/// malformed, or no entry survives validation.
///
/// # Examples
/// ```no_run
/// use wordle_play::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/starter_words.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    load_from_str(&content)
}

/// Load the embedded starter dictionary
///
/// # Errors
/// Returns `DictionaryError` if the embedded list is malformed, which would
/// indicate a packaging problem.
pub fn load_starter() -> Result<Dictionary, DictionaryError> {
    load_from_str(STARTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_list_loads() {
        let dictionary = load_starter().unwrap();
        assert!(dictionary.len() > 100);

        for text in ["apple", "paper", "robot", "ozone"] {
            assert!(
                dictionary.is_valid(&Word::new(text).unwrap()),
                "starter list should contain '{text}'"
            );
        }
    }

    #[test]
    fn starter_records_carry_annotations() {
        let dictionary = load_starter().unwrap();

        for record in dictionary.records() {
            assert!(!record.definition().is_empty());
            assert!(!record.part_of_speech().is_empty());
        }
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let json = r#"[
            {"word": "apple", "definition": "a fruit", "part_of_speech": "n."},
            {"word": "toolong", "definition": "bad length", "part_of_speech": "adj."},
            {"word": "app1e", "definition": "bad letters", "part_of_speech": "n."}
        ]"#;

        let dictionary = load_from_str(json).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.is_valid(&Word::new("apple").unwrap()));
    }

    #[test]
    fn legacy_field_names_accepted() {
        let json = r#"[
            {"word": "grape", "definition_zh": "a small fruit", "pos": "n."}
        ]"#;

        let dictionary = load_from_str(json).unwrap();
        let record = &dictionary.records()[0];
        assert_eq!(record.definition(), "a small fruit");
        assert_eq!(record.part_of_speech(), "n.");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            load_from_str("not json at all"),
            Err(DictionaryError::Parse(_))
        ));
    }

    #[test]
    fn all_invalid_entries_is_an_empty_error() {
        let json = r#"[
            {"word": "toolong", "definition": "x", "part_of_speech": "n."}
        ]"#;

        assert!(matches!(
            load_from_str(json),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_from_file("/no/such/path/words.json"),
            Err(DictionaryError::Io(_))
        ));
    }
}
