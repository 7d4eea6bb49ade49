//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a guess, read back a colored row
//! and the letters learned so far.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::engine::Round;
use crate::output::formatters::{knowledge_line, tile_row};
use crate::output::print_round_summary;

/// Run the simple CLI mode against stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<R: Rng>(
    dictionary: &Dictionary,
    rng: R,
    max_attempts: usize,
) -> Result<(), String> {
    let stdin = io::stdin();
    game_loop(dictionary, rng, max_attempts, stdin.lock())
}

/// Drive rounds from any line source
///
/// Split from [`run_simple`] so tests can feed scripted input.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn game_loop<R: Rng, In: BufRead>(
    dictionary: &Dictionary,
    mut rng: R,
    max_attempts: usize,
    mut input: In,
) -> Result<(), String> {
    print_banner(max_attempts, dictionary.len());

    let mut round = Round::start(dictionary, &mut rng, max_attempts);
    log::debug!("target word: {}", round.target().word());

    loop {
        let Some(line) = read_line(&mut input, &prompt_for(&round))? else {
            // EOF ends the session
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round = Round::start(dictionary, &mut rng, max_attempts);
                log::debug!("target word: {}", round.target().word());
                println!("\n🔄 New round started!\n");
            }
            guess => match round.submit(guess, dictionary) {
                Ok(report) => {
                    println!("  {}", tile_row(&report.word, &report.feedback));

                    let known = knowledge_line(round.knowledge());
                    if !known.is_empty() {
                        println!("  {known}");
                    }

                    if report.round_over {
                        print_round_summary(&round);
                        println!("\nType 'new' for another round or 'quit' to leave.");
                    }
                }
                Err(err) => println!("❌ {err}"),
            },
        }
    }
}

fn print_banner(max_attempts: usize, word_count: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {max_attempts} tries ({word_count} words loaded).");
    println!("Green is in place, yellow is elsewhere, gray is not in the word.");
    println!("Commands: 'new' for a new round, 'quit' to exit\n");
}

fn prompt_for(round: &Round) -> String {
    if round.is_over() {
        "Command".to_string()
    } else {
        format!(
            "Guess {}/{}",
            round.attempts_used() + 1,
            round.max_attempts()
        )
    }
}

/// Read one line after showing a prompt; `None` means end of input
fn read_line<In: BufRead>(input: &mut In, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}
