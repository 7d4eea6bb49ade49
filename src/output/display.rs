//! Display functions for round results

use colored::Colorize;

use super::formatters::tile_row;
use crate::engine::Round;

/// Print a finished round: every guess row plus the outcome and reveal
pub fn print_round_summary(round: &Round) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, record) in round.history().iter().enumerate() {
        let turn = i + 1;
        println!(
            "Turn {}: {}  {}",
            turn,
            tile_row(record.word(), record.feedback()),
            record.feedback().to_emoji()
        );
    }

    println!();
    if round.is_won() {
        println!(
            "{}",
            format!(
                "✅ Solved in {}/{} guesses!",
                round.attempts_used(),
                round.max_attempts()
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "❌ Out of guesses.".red().bold());
    }
    println!("The word was: {}", round.target().to_string().bright_yellow());
}
