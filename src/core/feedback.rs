//! Guess feedback calculation and representation
//!
//! Feedback marks each tile of a guess:
//! - `Absent` (gray): letter not available in the target
//! - `Present` (yellow): letter in the target, wrong position
//! - `Correct` (green): letter in the correct position
//!
//! Marks are kept per tile so callers can color each position independently.

use super::{WORD_LENGTH, Word};

/// Feedback for a single tile
///
/// Variants are ordered by information value: `Absent < Present < Correct`.
/// Keyboard tracking relies on this ordering to upgrade a letter's best
/// known mark without ever downgrading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileMark {
    Absent,
    Present,
    Correct,
}

/// Feedback for a complete guess, one mark per tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessFeedback {
    marks: [TileMark; WORD_LENGTH],
}

impl GuessFeedback {
    /// All greens (winning guess)
    pub const WIN: Self = Self {
        marks: [TileMark::Correct; WORD_LENGTH],
    };

    /// Build feedback directly from per-tile marks
    #[inline]
    #[must_use]
    pub const fn from_marks(marks: [TileMark; WORD_LENGTH]) -> Self {
        Self { marks }
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements the standard duplicate-letter rules: each target letter
    /// can justify at most one non-gray tile, and exact matches claim
    /// their letter before wrong-position matches do.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove each from the
    ///    target's available letter pool
    /// 2. Second pass: mark wrong-position matches (yellows) from whatever
    ///    pool remains, left to right
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::{GuessFeedback, TileMark, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = GuessFeedback::calculate(&guess, &target);
    ///
    /// // P(yellow) A(yellow) P(green) E(yellow) R(gray)
    /// assert_eq!(feedback.mark_at(2), TileMark::Correct);
    /// assert_eq!(feedback.mark_at(4), TileMark::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [TileMark::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to compare guess[i] with target[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letters()[i] == target.letters()[i] {
                marks[i] = TileMark::Correct;

                // Remove from available pool
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        // Allow: index needed to access guess[i] and check/set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == TileMark::Absent {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    marks[i] = TileMark::Present;
                    *count -= 1;
                }
            }
        }

        Self { marks }
    }

    /// Get all marks as an array
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[TileMark; WORD_LENGTH] {
        &self.marks
    }

    /// Get the mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> TileMark {
        self.marks[position]
    }

    /// Check if every tile is green
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.marks == [TileMark::Correct; WORD_LENGTH]
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&mark| mark == TileMark::Correct)
            .count()
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&mark| mark == TileMark::Present)
            .count()
    }

    /// Parse feedback from a string like "YYG-Y" or "🟨🟨🟩⬜🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::GuessFeedback;
    ///
    /// let f1 = GuessFeedback::from_str("GY-GY").unwrap();
    /// let f2 = GuessFeedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option-returning parse; the FromStr impl below wraps it
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut marks = [TileMark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => TileMark::Correct,
                'Y' | 'y' | '🟨' => TileMark::Present,
                '-' | '_' | '⬜' => TileMark::Absent,
                _ => return None,
            };
        }

        Some(Self { marks })
    }

    /// Convert feedback to an emoji string like "🟨🟨🟩⬜🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                TileMark::Correct => '🟩',
                TileMark::Present => '🟨',
                TileMark::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for GuessFeedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::TileMark::{Absent, Correct, Present};

    #[test]
    fn mark_ordering_upgrades_only() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Present.max(Correct), Correct);
        assert_eq!(Absent.max(Present), Present);
    }

    #[test]
    fn feedback_win_constant() {
        assert!(GuessFeedback::WIN.is_winning());
        assert_eq!(GuessFeedback::WIN.correct_count(), 5);
        assert_eq!(GuessFeedback::WIN.present_count(), 0);
    }

    #[test]
    fn feedback_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        assert_eq!(feedback.marks(), &[Absent; 5]);
        assert!(!feedback.is_winning());
    }

    #[test]
    fn feedback_all_correct() {
        let word = Word::new("apple").unwrap();
        let feedback = GuessFeedback::calculate(&word, &word);

        assert_eq!(feedback, GuessFeedback::WIN);
    }

    #[test]
    fn feedback_duplicate_guess_letter_single_target_copy() {
        // PAPER vs APPLE: the second P lands exactly on APPLE's first P,
        // leaving one P in the pool for the leading P.
        let guess = Word::new("paper").unwrap();
        let target = Word::new("apple").unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        assert_eq!(
            feedback.marks(),
            &[Present, Present, Correct, Present, Absent]
        );
        assert_eq!(feedback.correct_count(), 1);
        assert_eq!(feedback.present_count(), 3);
    }

    #[test]
    fn feedback_duplicate_guess_letters_share_target_pool() {
        // OZONE vs ROBOT: both O's draw from ROBOT's two O's, so both are
        // yellow while Z, N, E stay gray.
        let guess = Word::new("ozone").unwrap();
        let target = Word::new("robot").unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        assert_eq!(
            feedback.marks(),
            &[Present, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_green_consumes_pool_before_yellow() {
        // SASSY vs SMART: the leading S is green and exhausts SMART's only
        // S, so the later S's are gray rather than yellow.
        let guess = Word::new("sassy").unwrap();
        let target = Word::new("smart").unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        assert_eq!(
            feedback.marks(),
            &[Correct, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow (wrong position), second O green
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = GuessFeedback::calculate(&guess, &target);

        assert_eq!(
            feedback.marks(),
            &[Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(feedback.correct_count(), 1);
        assert_eq!(feedback.present_count(), 2);
    }

    #[test]
    fn feedback_from_str_valid() {
        let f1 = GuessFeedback::from_str("GYG--").unwrap();
        let f2 = GuessFeedback::from_str("🟩🟨🟩⬜⬜").unwrap();
        let f3 = GuessFeedback::from_str("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.marks(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!(GuessFeedback::from_str("GYGGYX").is_none()); // Too long (6 chars)
        assert!(GuessFeedback::from_str("GYG").is_none()); // Too short
        assert!(GuessFeedback::from_str("GXGGY").is_none()); // Invalid char
        assert!(GuessFeedback::from_str("").is_none()); // Empty
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = GuessFeedback::from_str("YYG-Y").unwrap();
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜🟨");
    }

    #[test]
    fn feedback_symmetry() {
        // Feedback of a word against itself is always a win
        for word in ["apple", "paper", "robot", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(GuessFeedback::calculate(&w, &w), GuessFeedback::WIN);
        }
    }
}
