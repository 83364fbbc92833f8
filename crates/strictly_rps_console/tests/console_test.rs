//! Scripted console sessions.

use std::io::Cursor;
use strictly_rps::{Catalog, Engine, FixedOpponent, Match, Variant};
use strictly_rps_console::Console;

fn play(variant: Variant, computer: &str, script: &str) -> (Match, String) {
    play_bytes(variant.catalog().unwrap(), computer, script.as_bytes())
}

fn play_bytes(catalog: Catalog, computer: &str, script: &[u8]) -> (Match, String) {
    let mut opponent = FixedOpponent::new(catalog.find(computer).unwrap());
    let mut game = Match::new(Engine::new(catalog));

    let mut console = Console::new(Cursor::new(script.to_vec()), Vec::new());
    console.play(&mut game, &mut opponent).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (game, output)
}

fn quartz_catalog() -> Catalog {
    Catalog::builder()
        .with_move("quartz")
        .with_move("paper")
        .with_move("scissors")
        .beats("quartz", "scissors", "blunts")
        .beats("paper", "quartz", "wraps")
        .beats("scissors", "paper", "cuts")
        .build()
        .unwrap()
}

#[test]
fn test_single_winning_round() {
    let (game, output) = play(Variant::Classic, "rock", "paper\nn\n");

    assert!(output.starts_with("Welcome to Rock, Paper, Scissors!"));
    assert!(output.contains("Type R, P, or S for Rock, Paper, or Scissors."));
    assert!(output.contains("The computer chose rock and the player chose paper."));
    assert!(output.contains("Paper covers rock.\nThe player wins!"));
    assert!(output.contains("Thanks for playing! Current record: W: 1 L: 0 D: 0 Rounds: 1"));
    assert_eq!(game.record().wins(), 1);
}

#[test]
fn test_invalid_move_reprompts() {
    let (game, output) = play(Variant::Classic, "rock", "dynamite\nr\nn\n");

    assert!(output.contains("That isn't a move in Rock, Paper, Scissors."));
    assert!(output.contains("It's a draw!"));
    assert_eq!(game.record().draws(), 1);
}

#[test]
fn test_play_again_reprompts_until_yes_or_no() {
    let (game, output) = play(Variant::Classic, "scissors", "p\nmaybe\nY\nROCK\nno\n");

    assert!(output.contains("That wasn't y or n, y/n?"));
    assert!(output.contains("Scissors cuts paper.\nThe computer wins!"));
    assert!(output.contains("Rock crushes scissors.\nThe player wins!"));
    assert_eq!(game.record().rounds(), 2);
    assert_eq!(game.record().losses(), 1);
}

#[test]
fn test_quit_mid_round_discards_round() {
    let (game, output) = play(Variant::LizardSpock, "spock", "sp\ny\nquit\n");

    assert!(output.contains("Welcome to Rock, Paper, Scissors, Lizard, Spock!"));
    assert!(output.contains("Round 2 > "));
    assert_eq!(game.record().rounds(), 1);
    assert_eq!(game.stage(), strictly_rps::Stage::Initial);
}

#[test]
fn test_end_of_input_ends_game() {
    let (game, output) = play(Variant::LizardSpock, "spock", "lizard\n");

    assert!(output.contains("Lizard poisons spock.\nThe player wins!"));
    assert!(output.contains("Play again y/n?"));
    assert_eq!(game.record().wins(), 1);
}

#[test]
fn test_move_shortcut_wins_over_quit_word() {
    let (game, output) = play_bytes(quartz_catalog(), "scissors", b"Q\nn\n");

    assert!(output.contains("Type Q, P, or S for Quartz, Paper, or Scissors."));
    assert!(output.contains("Type quit or exit at any prompt to quit."));
    assert!(output.contains("Quartz blunts scissors.\nThe player wins!"));
    assert_eq!(game.record().rounds(), 1);
}

#[test]
fn test_quit_word_still_leaves_when_not_a_move() {
    let (game, _) = play_bytes(quartz_catalog(), "paper", b"quit\n");
    assert_eq!(game.record().rounds(), 0);
}

#[test]
fn test_invalid_utf8_line_reprompts() {
    let (game, output) = play_bytes(
        Variant::Classic.catalog().unwrap(),
        "scissors",
        b"\xff\xfe\nrock\nn\n",
    );

    assert!(output.contains("That isn't a move in Rock, Paper, Scissors."));
    assert!(output.contains("Rock crushes scissors.\nThe player wins!"));
    assert_eq!(game.record().wins(), 1);
}
