//! Round lifecycle and head-to-head matches.
//!
//! A [`Round`] collects one move per seat and resolves once every seat has
//! moved. A [`Match`] runs successive two-seat rounds between the player and
//! a computer opponent and keeps the running [`Record`]. Calling lifecycle
//! operations out of order yields a [`GameSequenceError`].

use crate::catalog::MoveId;
use crate::engine::{Engine, RoundOutcome};
use crate::error::{GameSequenceError, RpsError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Add;
use tracing::{debug, info, instrument};

/// Seat of the human player in a [`Match`].
pub const PLAYER_SEAT: usize = 0;

/// Seat of the computer opponent in a [`Match`].
pub const OPPONENT_SEAT: usize = 1;

/// One round: a move slot per seat and, once resolved, the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    moves: Vec<Option<MoveId>>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Opens a round for `seats` players.
    pub fn new(seats: usize) -> Self {
        Self {
            moves: vec![None; seats],
            outcome: None,
        }
    }

    /// Number of seats.
    pub fn seats(&self) -> usize {
        self.moves.len()
    }

    /// Submitted moves by seat.
    pub fn moves(&self) -> &[Option<MoveId>] {
        &self.moves
    }

    /// Seats that have not moved yet.
    pub fn pending(&self) -> Vec<usize> {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_none())
            .map(|(seat, _)| seat)
            .collect()
    }

    /// Returns true once the round has an outcome.
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// Records the move of one seat.
    ///
    /// The move is checked against the catalog when the round resolves.
    #[instrument(skip(self))]
    pub fn submit(&mut self, seat: usize, mv: MoveId) -> Result<(), GameSequenceError> {
        if self.outcome.is_some() {
            return Err(GameSequenceError::AlreadyResolved);
        }
        let seats = self.moves.len();
        let slot = self
            .moves
            .get_mut(seat)
            .ok_or(GameSequenceError::NoSuchSeat { seat, seats })?;
        if slot.is_some() {
            return Err(GameSequenceError::AlreadyMoved(seat));
        }
        *slot = Some(mv);
        debug!(seat, "Move submitted");
        Ok(())
    }

    /// Resolves the round once every seat has moved.
    #[instrument(skip(self, engine))]
    pub fn resolve(&mut self, engine: &Engine) -> Result<&RoundOutcome, RpsError> {
        if self.outcome.is_some() {
            return Err(GameSequenceError::AlreadyResolved.into());
        }
        let moves: Vec<MoveId> = self.moves.iter().flatten().copied().collect();
        if moves.len() < self.moves.len() {
            return Err(GameSequenceError::MovesPending {
                pending: self.moves.len() - moves.len(),
                seats: self.moves.len(),
            }
            .into());
        }
        let outcome = engine.resolve_round(&moves)?;
        Ok(&*self.outcome.insert(outcome))
    }

    /// The outcome of a resolved round.
    pub fn outcome(&self) -> Result<&RoundOutcome, GameSequenceError> {
        self.outcome.as_ref().ok_or(GameSequenceError::NotResolved)
    }
}

/// A round from the player's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// The player won.
    Win,
    /// The opponent won.
    Loss,
    /// Nobody won.
    Draw,
}

impl Verdict {
    /// Reads a two-seat outcome from the player's seat.
    pub fn from_outcome(outcome: &RoundOutcome) -> Self {
        if outcome.is_tie() {
            Verdict::Draw
        } else if outcome.is_winner(PLAYER_SEAT) {
            Verdict::Win
        } else {
            Verdict::Loss
        }
    }
}

/// Running tally of verdicts.
///
/// Records of the same game can be merged with `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Record {
    /// Creates a record from counts.
    pub fn new(wins: u32, losses: u32, draws: u32) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    /// Rounds won by the player.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds won by the opponent.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds played.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Adds one verdict.
    pub fn push(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Draw => self.draws += 1,
        }
    }

    /// Orders two records by wins alone.
    pub fn compare_wins(&self, other: &Record) -> Ordering {
        self.wins.cmp(&other.wins)
    }
}

impl Add for Record {
    type Output = Record;

    fn add(self, other: Record) -> Record {
        Record {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            draws: self.draws + other.draws,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current record: W: {} L: {} D: {} Rounds: {}",
            self.wins,
            self.losses,
            self.draws,
            self.rounds()
        )
    }
}

/// Everything about one resolved head-to-head round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    player_move: MoveId,
    opponent_move: MoveId,
    verdict: Verdict,
}

impl RoundReport {
    /// The player's move.
    pub fn player_move(&self) -> MoveId {
        self.player_move
    }

    /// The opponent's move.
    pub fn opponent_move(&self) -> MoveId {
        self.opponent_move
    }

    /// The result for the player.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// Where a [`Match`] is within its current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// No round open.
    Initial,
    /// Round open, waiting for moves.
    Begun,
    /// Both moves in, not resolved.
    Moved,
    /// Outcome known.
    Resolved,
}

/// A player-versus-computer match.
#[derive(Debug, Clone)]
pub struct Match {
    engine: Engine,
    round: Option<Round>,
    record: Record,
}

impl Match {
    /// Starts a match with no rounds played.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            round: None,
            record: Record::default(),
        }
    }

    /// The engine deciding rounds.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Results so far.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Number of the current (or next) round, starting at 1.
    pub fn round_number(&self) -> u32 {
        match &self.round {
            Some(round) if round.is_resolved() => self.record.rounds(),
            _ => self.record.rounds() + 1,
        }
    }

    /// Where the current round stands.
    pub fn stage(&self) -> Stage {
        match &self.round {
            None => Stage::Initial,
            Some(round) if round.is_resolved() => Stage::Resolved,
            Some(round) if round.pending().is_empty() => Stage::Moved,
            Some(_) => Stage::Begun,
        }
    }

    /// Opens a new round.
    #[instrument(skip(self))]
    pub fn begin(&mut self) -> Result<(), GameSequenceError> {
        if self.round.is_some() {
            return Err(GameSequenceError::AlreadyBegun);
        }
        self.round = Some(Round::new(2));
        info!(round = self.round_number(), "Round begun");
        Ok(())
    }

    /// Submits the player's move.
    pub fn submit_player(&mut self, mv: MoveId) -> Result<(), RpsError> {
        self.submit(PLAYER_SEAT, mv)
    }

    /// Submits the opponent's move.
    pub fn submit_opponent(&mut self, mv: MoveId) -> Result<(), RpsError> {
        self.submit(OPPONENT_SEAT, mv)
    }

    #[instrument(skip(self))]
    fn submit(&mut self, seat: usize, mv: MoveId) -> Result<(), RpsError> {
        let round = self.round.as_mut().ok_or(GameSequenceError::NotBegun)?;
        self.engine.catalog().check(mv)?;
        round.submit(seat, mv)?;
        Ok(())
    }

    /// Resolves the open round and adds its verdict to the record.
    #[instrument(skip(self))]
    pub fn resolve(&mut self) -> Result<RoundReport, RpsError> {
        let round = self.round.as_mut().ok_or(GameSequenceError::NotBegun)?;
        let verdict = Verdict::from_outcome(round.resolve(&self.engine)?);
        self.record.push(verdict);
        info!(%verdict, record = %self.record, "Round resolved");
        self.report()
    }

    /// Report of the resolved round.
    pub fn report(&self) -> Result<RoundReport, RpsError> {
        let round = self.round.as_ref().ok_or(GameSequenceError::NotBegun)?;
        let outcome = round.outcome()?;
        match round.moves() {
            [Some(player_move), Some(opponent_move)] => Ok(RoundReport {
                player_move: *player_move,
                opponent_move: *opponent_move,
                verdict: Verdict::from_outcome(outcome),
            }),
            _ => Err(GameSequenceError::NotResolved.into()),
        }
    }

    /// Closes a resolved round so the next one can begin.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> Result<(), GameSequenceError> {
        match &self.round {
            Some(round) if round.is_resolved() => {
                self.round = None;
                Ok(())
            }
            Some(_) => Err(GameSequenceError::NotResolved),
            None => Err(GameSequenceError::NotBegun),
        }
    }

    /// Throws away an unresolved round without recording it.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) {
        if let Some(round) = self.round.take_if(|round| !round.is_resolved()) {
            debug!(pending = round.pending().len(), "Round abandoned");
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} match, Stage: {}, {}",
            crate::narrate::game_name(self.engine.catalog()),
            self.stage(),
            self.record
        )
    }
}
