//! Tests for match lifecycle and records.

use strictly_rps::{
    Engine, GameSequenceError, InvalidMoveError, Match, MoveId, Record, RpsError, Stage, Variant,
    Verdict,
};

fn classic_match() -> Match {
    Match::new(Engine::new(Variant::Classic.catalog().unwrap()))
}

fn id(game: &Match, name: &str) -> MoveId {
    game.engine().catalog().find(name).unwrap()
}

#[test]
fn test_full_round_lifecycle() {
    let mut game = classic_match();
    assert_eq!(game.stage(), Stage::Initial);
    assert_eq!(game.round_number(), 1);

    game.begin().unwrap();
    assert_eq!(game.stage(), Stage::Begun);
    game.submit_opponent(id(&game, "rock")).unwrap();
    game.submit_player(id(&game, "paper")).unwrap();
    assert_eq!(game.stage(), Stage::Moved);

    let report = game.resolve().unwrap();
    assert_eq!(report.verdict(), Verdict::Win);
    assert_eq!(game.stage(), Stage::Resolved);
    assert_eq!(game.record(), &Record::new(1, 0, 0));
    assert_eq!(game.report().unwrap(), report);

    game.next_round().unwrap();
    assert_eq!(game.stage(), Stage::Initial);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn test_begin_twice_is_out_of_sequence() {
    let mut game = classic_match();
    game.begin().unwrap();
    assert_eq!(game.begin(), Err(GameSequenceError::AlreadyBegun));
}

#[test]
fn test_moves_before_begin_are_out_of_sequence() {
    let mut game = classic_match();
    let rock = id(&game, "rock");
    assert_eq!(
        game.submit_player(rock),
        Err(RpsError::Sequence(GameSequenceError::NotBegun))
    );
    assert_eq!(
        game.resolve(),
        Err(RpsError::Sequence(GameSequenceError::NotBegun))
    );
}

#[test]
fn test_resolve_before_all_moves_is_out_of_sequence() {
    let mut game = classic_match();
    game.begin().unwrap();
    game.submit_opponent(id(&game, "rock")).unwrap();
    assert!(matches!(
        game.resolve(),
        Err(RpsError::Sequence(GameSequenceError::MovesPending { pending: 1, .. }))
    ));
    assert_eq!(
        game.report(),
        Err(RpsError::Sequence(GameSequenceError::NotResolved))
    );
    assert_eq!(game.next_round(), Err(GameSequenceError::NotResolved));
}

#[test]
fn test_player_cannot_move_twice() {
    let mut game = classic_match();
    game.begin().unwrap();
    game.submit_player(id(&game, "rock")).unwrap();
    assert_eq!(
        game.submit_player(id(&game, "paper")),
        Err(RpsError::Sequence(GameSequenceError::AlreadyMoved(0)))
    );
}

#[test]
fn test_foreign_move_rejected_on_submit() {
    let mut game = classic_match();
    game.begin().unwrap();
    assert!(matches!(
        game.submit_player(MoveId::new(3)),
        Err(RpsError::InvalidMove(InvalidMoveError::ForeignMove { .. }))
    ));
    assert_eq!(game.stage(), Stage::Begun);
}

#[test]
fn test_record_tracks_every_verdict() {
    let mut game = classic_match();
    let plays = [("rock", "rock"), ("rock", "paper"), ("scissors", "paper")];
    for (player, opponent) in plays {
        game.begin().unwrap();
        game.submit_player(id(&game, player)).unwrap();
        game.submit_opponent(id(&game, opponent)).unwrap();
        game.resolve().unwrap();
        game.next_round().unwrap();
    }
    let record = *game.record();
    assert_eq!((record.wins(), record.losses(), record.draws()), (1, 1, 1));
    assert_eq!(record.rounds(), 3);
    assert!(game.to_string().contains("Stage: initial"));
}
