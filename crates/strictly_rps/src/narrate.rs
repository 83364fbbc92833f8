//! Human-readable text for games: titles, rules and round reports.

use crate::catalog::{Catalog, MoveId};
use crate::session::{RoundReport, Verdict};

/// Uppercases the first letter.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins items with commas, putting "or" before the last one.
///
/// `["R", "P", "S"]` becomes `R, P, or S`; two items become `R or S`.
pub fn comma_or<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(|item| item.as_ref()).collect();
            format!("{}, or {}", head.join(", "), last.as_ref())
        }
    }
}

/// Capitalized move names in catalog order.
pub fn move_list(catalog: &Catalog) -> Vec<String> {
    catalog.moves().map(|m| capitalize(catalog.name(m))).collect()
}

/// Name of the game, e.g. `Rock, Paper, Scissors`.
pub fn game_name(catalog: &Catalog) -> String {
    move_list(catalog).join(", ")
}

/// Accepted shortcuts, e.g. `R, P, or S`.
pub fn options(catalog: &Catalog) -> String {
    let shortcuts: Vec<&str> = catalog.moves().map(|m| catalog.shortcut(m)).collect();
    comma_or(&shortcuts)
}

/// One line per move listing what it defeats and how.
///
/// ```text
/// Rock crushes scissors;
/// Paper covers rock;
/// Scissors cuts paper.
/// ```
pub fn rules_summary(catalog: &Catalog) -> String {
    let lines: Vec<String> = catalog
        .moves()
        .map(|winner| {
            let victims: Vec<String> = catalog
                .victims(winner)
                .into_iter()
                .map(|loser| {
                    format!(
                        "{} {}",
                        catalog.verb(winner, loser).unwrap_or_default(),
                        catalog.name(loser)
                    )
                })
                .collect();
            format!("{} {}", capitalize(catalog.name(winner)), victims.join(", "))
        })
        .collect();
    format!("{}.", lines.join(";\n"))
}

/// Full welcome text shown before the first round.
pub fn instructions(catalog: &Catalog) -> String {
    format!(
        "Welcome to {}!\n{}\nType {} for {}.\nThen, press Enter.\n\
         The computer will go simultaneously and a winner shall be decided!",
        game_name(catalog),
        rules_summary(catalog),
        options(catalog),
        comma_or(&move_list(catalog)),
    )
}

/// Shorter prompt shown after input that isn't a move.
pub fn retry_instructions(catalog: &Catalog) -> String {
    format!(
        "That isn't a move in {}.\nEnter {} (or the full name of a move).",
        game_name(catalog),
        options(catalog)
    )
}

/// `Paper covers rock.` when `winner` defeats `loser`.
pub fn describe(catalog: &Catalog, winner: MoveId, loser: MoveId) -> Option<String> {
    catalog.verb(winner, loser).map(|verb| {
        format!(
            "{} {} {}.",
            capitalize(catalog.name(winner)),
            verb,
            catalog.name(loser)
        )
    })
}

/// What both sides chose, how the winner won, and who it was.
pub fn report(catalog: &Catalog, report: &RoundReport) -> String {
    let player = report.player_move();
    let opponent = report.opponent_move();
    let mut text = format!(
        "The computer chose {} and the player chose {}.\n",
        catalog.name(opponent),
        catalog.name(player)
    );
    let (line, result) = match report.verdict() {
        Verdict::Win => (describe(catalog, player, opponent), "The player wins!"),
        Verdict::Loss => (describe(catalog, opponent, player), "The computer wins!"),
        Verdict::Draw => (None, "It's a draw!"),
    };
    if let Some(line) = line {
        text.push_str(&line);
        text.push('\n');
    }
    text.push_str(result);
    text
}
