//! Strictly RPS - console game
//!
//! Rock, paper, scissors and its variants against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_rps::{Engine, Match, VariantConfig, narrate};
use strictly_rps_console::{Cli, Command, Console, GameArgs, build_opponent, load_catalog};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            game,
            opponent,
            seed,
        } => run_play(game, opponent, seed),
        Command::Rules { game } => run_rules(game),
        Command::Export { game } => run_export(game),
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game
#[instrument(skip(game))]
fn run_play(game: GameArgs, opponent: String, seed: Option<u64>) -> Result<()> {
    let catalog = load_catalog(&game)?;
    let mut opponent = build_opponent(&opponent, seed, &catalog)?;
    let mut game = Match::new(Engine::new(catalog));

    info!("Starting console game");
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.play(&mut game, opponent.as_mut())
}

/// Print the rules of a game
fn run_rules(game: GameArgs) -> Result<()> {
    let catalog = load_catalog(&game)?;
    println!("{}", narrate::game_name(&catalog));
    println!("{}", narrate::rules_summary(&catalog));
    Ok(())
}

/// Print a game as a TOML variant file
fn run_export(game: GameArgs) -> Result<()> {
    let catalog = load_catalog(&game)?;
    print!("{}", VariantConfig::from_catalog(&catalog).to_toml()?);
    Ok(())
}
