//! Accumulated per-letter knowledge across a round
//!
//! While tile feedback is positional, the on-screen keyboard tracks one mark
//! per letter: the best thing learned about it so far. Marks only ever move
//! up the `Absent < Present < Correct` ladder, so a letter shown green stays
//! green even when a later guess plays it in the wrong spot.

use rustc_hash::FxHashMap;

use super::{GuessFeedback, TileMark, Word};

/// Best known mark for each guessed letter
///
/// Letters never guessed have no entry. A letter is recorded `Absent` only
/// when the target truly lacks it; a gray tile of a duplicated letter does
/// not condemn the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyKnowledge {
    best: FxHashMap<u8, TileMark>,
}

impl KeyKnowledge {
    /// Create an empty knowledge map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best known mark for a letter, if it has been guessed
    #[inline]
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<TileMark> {
        self.best.get(&letter).copied()
    }

    /// Raise a letter's mark, keeping the higher of old and new
    pub fn upgrade(&mut self, letter: u8, mark: TileMark) {
        self.best
            .entry(letter)
            .and_modify(|best| *best = (*best).max(mark))
            .or_insert(mark);
    }

    /// Fold one guess's feedback into the knowledge map
    ///
    /// Each letter of the guess is reduced to its best mark within this
    /// guess first, so a duplicated letter with one green and one gray tile
    /// counts as green. Letters whose best mark is `Absent` are recorded
    /// only when the target does not contain them at all.
    pub fn absorb(&mut self, guess: &Word, feedback: &GuessFeedback, target: &Word) {
        let mut this_guess: FxHashMap<u8, TileMark> = FxHashMap::default();
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            this_guess
                .entry(letter)
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }

        for (letter, mark) in this_guess {
            match mark {
                TileMark::Correct | TileMark::Present => self.upgrade(letter, mark),
                TileMark::Absent => {
                    if !target.contains(letter) {
                        self.upgrade(letter, TileMark::Absent);
                    }
                }
            }
        }
    }

    /// Iterate over all known letters and their best marks
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (u8, TileMark)> + '_ {
        self.best.iter().map(|(&letter, &mark)| (letter, mark))
    }

    /// Number of letters with a known mark
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Check whether nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::TileMark::{Absent, Correct, Present};

    fn absorb_guess(knowledge: &mut KeyKnowledge, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);
        knowledge.absorb(&guess, &feedback, &target);
    }

    #[test]
    fn unguessed_letters_have_no_status() {
        let knowledge = KeyKnowledge::new();
        assert!(knowledge.is_empty());
        assert_eq!(knowledge.status(b'a'), None);
    }

    #[test]
    fn absorb_records_each_guessed_letter() {
        let mut knowledge = KeyKnowledge::new();
        absorb_guess(&mut knowledge, "paper", "apple");

        assert_eq!(knowledge.status(b'p'), Some(Correct));
        assert_eq!(knowledge.status(b'a'), Some(Present));
        assert_eq!(knowledge.status(b'e'), Some(Present));
        assert_eq!(knowledge.status(b'r'), Some(Absent));
        assert_eq!(knowledge.status(b'z'), None);
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut knowledge = KeyKnowledge::new();
        knowledge.upgrade(b'e', Correct);
        knowledge.upgrade(b'e', Present);
        knowledge.upgrade(b'e', Absent);

        assert_eq!(knowledge.status(b'e'), Some(Correct));
    }

    #[test]
    fn later_guesses_only_improve_marks() {
        let mut knowledge = KeyKnowledge::new();

        // FUDGE vs EVERY: the E is in the wrong spot, so yellow
        absorb_guess(&mut knowledge, "fudge", "every");
        assert_eq!(knowledge.status(b'e'), Some(Present));

        // EVENT vs EVERY: E lands green at position 0
        absorb_guess(&mut knowledge, "event", "every");
        assert_eq!(knowledge.status(b'e'), Some(Correct));

        // GEESE vs EVERY: one E green, one yellow, one gray; stays green
        absorb_guess(&mut knowledge, "geese", "every");
        assert_eq!(knowledge.status(b'e'), Some(Correct));
    }

    #[test]
    fn gray_duplicate_does_not_condemn_letter() {
        // OZONE vs ROBOT: both O tiles are yellow, so O is Present; Z, N
        // and E are truly missing from ROBOT and go Absent.
        let mut knowledge = KeyKnowledge::new();
        absorb_guess(&mut knowledge, "ozone", "robot");

        assert_eq!(knowledge.status(b'o'), Some(Present));
        assert_eq!(knowledge.status(b'z'), Some(Absent));
        assert_eq!(knowledge.status(b'n'), Some(Absent));
        assert_eq!(knowledge.status(b'e'), Some(Absent));
    }

    #[test]
    fn gray_tile_of_letter_in_target_is_not_recorded_absent() {
        // SASSY vs SMART: first S green, later S tiles gray. S must stay
        // green and never be marked absent.
        let mut knowledge = KeyKnowledge::new();
        absorb_guess(&mut knowledge, "sassy", "smart");

        assert_eq!(knowledge.status(b's'), Some(Correct));
        assert_eq!(knowledge.status(b'a'), Some(Present));
        assert_eq!(knowledge.status(b'y'), Some(Absent));
    }

    #[test]
    fn absorb_with_handmade_feedback_trusts_target() {
        // Feedback not derived from the target: an all-gray row for a word
        // sharing letters with the target must not mark those keys absent.
        let mut knowledge = KeyKnowledge::new();
        let guess = Word::new("paper").unwrap();
        let target = Word::new("apple").unwrap();
        let feedback = GuessFeedback::from_str("-----").unwrap();
        knowledge.absorb(&guess, &feedback, &target);

        assert_eq!(knowledge.status(b'p'), None);
        assert_eq!(knowledge.status(b'a'), None);
        assert_eq!(knowledge.status(b'r'), Some(Absent));
    }

    #[test]
    fn iter_covers_all_recorded_letters() {
        let mut knowledge = KeyKnowledge::new();
        absorb_guess(&mut knowledge, "ozone", "robot");

        let mut letters: Vec<u8> = knowledge.iter().map(|(letter, _)| letter).collect();
        letters.sort_unstable();
        assert_eq!(letters, vec![b'e', b'n', b'o', b'z']);
        assert_eq!(knowledge.len(), 4);
    }
}
