//! Interactive console loop.
//!
//! Reads from any [`BufRead`] and writes to any [`Write`], so the same loop
//! serves stdin/stdout and scripted sessions.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use derive_new::new;
use std::io::{BufRead, Write};
use strictly_rps::{Catalog, Match, MoveId, Opponent, narrate};
use tracing::{debug, info, instrument};

/// Inputs that leave the game at any prompt.
pub const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

const YES: &str = "y";
const NO: &str = "n";

/// Drives a [`Match`] through text input and output.
#[derive(Debug, new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Gives the output back, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the user quits or input ends.
    #[instrument(skip_all, fields(opponent = opponent.name()))]
    pub fn play(&mut self, game: &mut Match, opponent: &mut dyn Opponent) -> Result<()> {
        let catalog = game.engine().catalog();
        writeln!(self.output, "{}", narrate::instructions(catalog))?;
        writeln!(self.output, "{}", quit_hint(catalog))?;

        loop {
            game.begin()?;
            let computer = opponent.choose(game.engine().catalog());
            game.submit_opponent(computer)?;

            let Some(choice) = self.prompt_move(game)? else {
                game.abandon();
                break;
            };
            game.submit_player(choice)?;

            let report = game.resolve()?;
            writeln!(self.output, "{}", narrate::report(game.engine().catalog(), &report))?;
            writeln!(self.output, "{}", game.record())?;
            game.next_round()?;

            if !self.prompt_play_again()? {
                break;
            }
        }

        info!(record = %game.record(), "Game over");
        writeln!(self.output, "Thanks for playing! {}", game.record())?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks for a move until one parses. `None` means the user left.
    fn prompt_move(&mut self, game: &Match) -> Result<Option<MoveId>> {
        let catalog = game.engine().catalog();
        loop {
            write!(self.output, "Round {} > ", game.round_number())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            // Moves shadow quit words, so a `Q` shortcut stays playable.
            match catalog.parse(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) if is_quit(&line) => return Ok(None),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "{}", narrate::retry_instructions(catalog))?;
                }
            }
        }
    }

    /// Asks whether to play another round until the answer is yes or no.
    fn prompt_play_again(&mut self) -> Result<bool> {
        writeln!(self.output, "Play again {YES}/{NO}?")?;
        loop {
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let answer = line.trim().to_lowercase();
            match answer.as_str() {
                YES | "yes" => return Ok(true),
                NO | "no" => return Ok(false),
                _ if is_quit(&answer) => return Ok(false),
                _ => {
                    let warning = format!("That wasn't {YES} or {NO}, {YES}/{NO}?");
                    writeln!(self.output, "{}", warning.red())?;
                }
            }
        }
    }

    /// Next line of input, `None` at end of input.
    ///
    /// Bytes that aren't UTF-8 are replaced rather than rejected, so a
    /// garbled line is answered like any other unknown input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Tells the user how to leave, naming only quit words that aren't moves.
fn quit_hint(catalog: &Catalog) -> String {
    let words: Vec<&str> = QUIT_WORDS
        .iter()
        .copied()
        .filter(|word| catalog.parse(word).is_err())
        .collect();
    if words.is_empty() {
        "End the input at any prompt to quit.".to_string()
    } else {
        format!("Type {} at any prompt to quit.", narrate::comma_or(&words))
    }
}

fn is_quit(input: &str) -> bool {
    let input = input.trim();
    QUIT_WORDS.iter().any(|word| word.eq_ignore_ascii_case(input))
}
