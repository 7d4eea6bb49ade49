//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{GuessFeedback, KeyKnowledge, TileMark, Word};

/// Format a guess as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: &GuessFeedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase() as char);
            match mark {
                TileMark::Correct => cell.black().on_green().to_string(),
                TileMark::Present => cell.black().on_yellow().to_string(),
                TileMark::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split letter knowledge into sorted uppercase groups
///
/// Returns `(correct, present, absent)` as space-separated letter lists,
/// each sorted alphabetically.
#[must_use]
pub fn knowledge_groups(knowledge: &KeyKnowledge) -> (String, String, String) {
    let mut correct = Vec::new();
    let mut present = Vec::new();
    let mut absent = Vec::new();

    for (letter, mark) in knowledge.iter() {
        match mark {
            TileMark::Correct => correct.push(letter),
            TileMark::Present => present.push(letter),
            TileMark::Absent => absent.push(letter),
        }
    }

    let to_line = |mut letters: Vec<u8>| {
        letters.sort_unstable();
        letters
            .iter()
            .map(|&letter| (letter.to_ascii_uppercase() as char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    (to_line(correct), to_line(present), to_line(absent))
}

/// Format the letter knowledge as a colored one-liner
///
/// Returns an empty string until at least one letter has been tried.
#[must_use]
pub fn knowledge_line(knowledge: &KeyKnowledge) -> String {
    let (correct, present, absent) = knowledge_groups(knowledge);

    let mut parts = Vec::new();
    if !correct.is_empty() {
        parts.push(format!("hit {}", correct.green().bold()));
    }
    if !present.is_empty() {
        parts.push(format!("close {}", present.yellow().bold()));
    }
    if !absent.is_empty() {
        parts.push(format!("miss {}", absent.bright_black()));
    }

    parts.join("   ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge_after(guess: &str, target: &str) -> KeyKnowledge {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        let mut knowledge = KeyKnowledge::new();
        knowledge.absorb(&guess, &feedback, &target);
        knowledge
    }

    #[test]
    fn knowledge_groups_sorted_uppercase() {
        let knowledge = knowledge_after("ozone", "robot");
        let (correct, present, absent) = knowledge_groups(&knowledge);

        assert_eq!(correct, "");
        assert_eq!(present, "O");
        assert_eq!(absent, "E N Z");
    }

    #[test]
    fn knowledge_groups_with_greens() {
        let knowledge = knowledge_after("paper", "apple");
        let (correct, present, absent) = knowledge_groups(&knowledge);

        assert_eq!(correct, "P");
        assert_eq!(present, "A E");
        assert_eq!(absent, "R");
    }

    #[test]
    fn knowledge_line_empty_before_any_guess() {
        assert_eq!(knowledge_line(&KeyKnowledge::new()), "");
    }

    #[test]
    fn tile_row_keeps_letter_order() {
        let word = Word::new("paper").unwrap();
        let target = Word::new("apple").unwrap();
        let feedback = GuessFeedback::calculate(&word, &target);

        let row = tile_row(&word, &feedback);
        let letters: Vec<char> = row.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, vec!['P', 'A', 'P', 'E', 'R']);
    }
}
