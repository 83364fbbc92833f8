//! Command-line interface for strictly_rps.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_rps::Variant;

/// Strictly RPS - rock, paper, scissors and its variants
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Play rock, paper, scissors and its variants in the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Which game to play
        #[command(flatten)]
        game: GameArgs,

        /// Computer strategy: random, cycle, or a move to always play (move:<name> for moves named random or cycle)
        #[arg(long, default_value = "random")]
        opponent: String,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the rules of a game
    Rules {
        /// Which game to describe
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print a game as a TOML variant file
    Export {
        /// Which game to export
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Game selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Built-in variant (classic, lizard-spock)
    #[arg(long, default_value_t = Variant::Classic)]
    pub variant: Variant,

    /// TOML variant file; takes precedence over --variant
    #[arg(long)]
    pub variant_file: Option<PathBuf>,
}
