//! Terminal Wordle - CLI
//!
//! Play Wordle in the terminal: full-screen TUI or simple line-based mode,
//! with the built-in word list or one supplied from a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_play::{
    commands::run_simple,
    dictionary::{Dictionary, loader},
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_play",
    about = "Terminal Wordle with per-tile feedback and a definition-annotated word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: omit for the built-in starter list, or pass a JSON file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Attempts allowed per round
    #[arg(short, long, global = true, default_value_t = 6)]
    attempts: usize,

    /// Seed for the target picker, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - board, keyboard, and messages)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,
}

/// Load the word list chosen by the -w flag
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => loader::load_from_file(path).with_context(|| {
            format!(
                "cannot start a round: word list {} unavailable",
                path.display()
            )
        }),
        None => loader::load_starter()
            .context("cannot start a round: built-in word list unavailable"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.attempts > 0, "attempts must be at least 1");

    let dictionary = load_dictionary(cli.wordlist.as_ref())?;
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&dictionary, rng, cli.attempts);
            run_tui(app)
        }
        Commands::Simple => {
            run_simple(&dictionary, rng, cli.attempts).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
