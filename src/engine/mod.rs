//! Round state machine
//!
//! Drives a single game round: accepting guesses, scoring them, and
//! tracking win/loss state across a fixed attempt budget.

mod round;

pub use round::{GuessError, GuessRecord, GuessReport, Round};
