//! Round resolution over a catalog.

use crate::catalog::{Catalog, MoveId};
use crate::error::{GameSequenceError, RpsError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of resolving one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One move class survived; everyone who played it wins.
    Win {
        /// The surviving move.
        winning_move: MoveId,
        /// Seats that played the winning move, ascending.
        winners: Vec<usize>,
    },
    /// Nobody wins.
    Tie,
}

impl RoundOutcome {
    /// Seats that won, empty on a tie.
    pub fn winners(&self) -> &[usize] {
        match self {
            RoundOutcome::Win { winners, .. } => winners,
            RoundOutcome::Tie => &[],
        }
    }

    /// The winning move, if there is one.
    pub fn winning_move(&self) -> Option<MoveId> {
        match self {
            RoundOutcome::Win { winning_move, .. } => Some(*winning_move),
            RoundOutcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, RoundOutcome::Tie)
    }

    /// Returns true if `seat` is among the winners.
    pub fn is_winner(&self, seat: usize) -> bool {
        self.winners().contains(&seat)
    }
}

/// Resolves rounds under one catalog's rules.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    /// Creates an engine for `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves one round, `moves[i]` being the move of seat `i`.
    ///
    /// Two seats: equal moves tie, otherwise the move that defeats the other
    /// wins. More seats: every move class defeated by another present class
    /// is eliminated; a single survivor wins for all its holders, anything
    /// else is a tie. A round where everyone played the same move is a tie.
    #[instrument(skip(self))]
    pub fn resolve_round(&self, moves: &[MoveId]) -> Result<RoundOutcome, RpsError> {
        for &m in moves {
            self.catalog.check(m)?;
        }
        if moves.len() < 2 {
            return Err(GameSequenceError::TooFewMoves(moves.len()).into());
        }

        let mut classes = moves.to_vec();
        classes.sort();
        classes.dedup();
        if classes.len() == 1 {
            debug!("All seats played the same move");
            return Ok(RoundOutcome::Tie);
        }

        let survivors: Vec<MoveId> = classes
            .iter()
            .copied()
            .filter(|&class| !classes.iter().any(|&other| self.catalog.defeats(other, class)))
            .collect();
        debug!(classes = classes.len(), survivors = survivors.len(), "Eliminated defeated moves");

        match survivors.as_slice() {
            [winning_move] => {
                let winners = moves
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| *m == winning_move)
                    .map(|(seat, _)| seat)
                    .collect();
                Ok(RoundOutcome::Win {
                    winning_move: *winning_move,
                    winners,
                })
            }
            _ => Ok(RoundOutcome::Tie),
        }
    }
}

impl From<Catalog> for Engine {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
