//! The move catalog: named moves and the beats-relation between them.
//!
//! A [`Catalog`] is built once through a [`CatalogBuilder`] and never
//! changes afterwards. Building validates the relation against
//! [`CatalogInvariants`], so every catalog in circulation is irreflexive,
//! antisymmetric and total.

use crate::error::{ConfigurationError, InvalidMoveError};
use crate::invariants::{CatalogInvariants, InvariantSet};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument, warn};

/// Verb used when a rule doesn't name one.
pub const DEFAULT_VERB: &str = "beats";

/// Handle to one move of a [`Catalog`].
///
/// Handles are positions in catalog order. A handle only means something
/// relative to the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveId(usize);

impl MoveId {
    /// Creates a handle for the move at `index` in catalog order.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the catalog position of this move.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Name and input shortcut of a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct MoveSpec {
    /// Lowercase move name, e.g. `rock`.
    name: String,
    /// Uppercase input shortcut, e.g. `R`.
    shortcut: String,
}

/// Immutable set of moves with the relation deciding who beats whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    moves: Vec<MoveSpec>,
    /// `beats[a][b]` is true when move `a` defeats move `b`.
    beats: Vec<Vec<bool>>,
    verbs: BTreeMap<(MoveId, MoveId), String>,
}

impl Catalog {
    /// Starts building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the catalog has no moves. Built catalogs never are.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All moves in catalog order.
    pub fn moves(&self) -> impl Iterator<Item = MoveId> + '_ {
        (0..self.moves.len()).map(MoveId)
    }

    /// True if the handle belongs to this catalog.
    pub fn contains(&self, id: MoveId) -> bool {
        id.0 < self.moves.len()
    }

    /// Returns the handle back if it belongs to this catalog.
    pub fn check(&self, id: MoveId) -> Result<MoveId, InvalidMoveError> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(InvalidMoveError::ForeignMove {
                index: id.0,
                size: self.moves.len(),
            })
        }
    }

    /// Name and shortcut of a move.
    pub fn spec(&self, id: MoveId) -> Option<&MoveSpec> {
        self.moves.get(id.0)
    }

    /// Lowercase name of a move, or `unknown` for a foreign handle.
    pub fn name(&self, id: MoveId) -> &str {
        self.spec(id).map_or("unknown", |spec| spec.name.as_str())
    }

    /// Input shortcut of a move, or `?` for a foreign handle.
    pub fn shortcut(&self, id: MoveId) -> &str {
        self.spec(id).map_or("?", |spec| spec.shortcut.as_str())
    }

    /// Looks a move up by exact lowercase name.
    pub fn find(&self, name: &str) -> Option<MoveId> {
        self.moves
            .iter()
            .position(|spec| spec.name == name)
            .map(MoveId)
    }

    /// True iff `winner` defeats `loser` under this catalog's rules.
    pub fn defeats(&self, winner: MoveId, loser: MoveId) -> bool {
        self.beats
            .get(winner.0)
            .and_then(|row| row.get(loser.0))
            .copied()
            .unwrap_or(false)
    }

    /// The verb describing how `winner` defeats `loser`, if it does.
    pub fn verb(&self, winner: MoveId, loser: MoveId) -> Option<&str> {
        if !self.defeats(winner, loser) {
            return None;
        }
        Some(
            self.verbs
                .get(&(winner, loser))
                .map_or(DEFAULT_VERB, String::as_str),
        )
    }

    /// Moves defeated by `winner`, in catalog order.
    pub fn victims(&self, winner: MoveId) -> Vec<MoveId> {
        self.moves()
            .filter(|&loser| self.defeats(winner, loser))
            .collect()
    }

    /// Parses player input into a move.
    ///
    /// Input is trimmed and matched case-insensitively against move names
    /// first, then against shortcuts.
    #[instrument(skip(self))]
    pub fn parse(&self, input: &str) -> Result<MoveId, InvalidMoveError> {
        let wanted = input.trim();
        let by_name = self
            .moves
            .iter()
            .position(|spec| spec.name.eq_ignore_ascii_case(wanted));
        let found = by_name.or_else(|| {
            self.moves
                .iter()
                .position(|spec| spec.shortcut.eq_ignore_ascii_case(wanted))
        });

        match found {
            Some(index) => {
                debug!(index, "Parsed move");
                Ok(MoveId(index))
            }
            None => Err(InvalidMoveError::UnknownInput {
                input: wanted.to_string(),
                game: crate::narrate::game_name(self),
            }),
        }
    }
}

/// A declared rule, before names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    winner: String,
    loser: String,
    verb: String,
}

/// Collects moves and rules, then validates them into a [`Catalog`].
///
/// Moves and rules are referenced by name, so they can be declared in any
/// order. Names are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    moves: Vec<(String, Option<String>)>,
    rules: Vec<Rule>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a move whose shortcut is its first letter.
    pub fn with_move(mut self, name: impl Into<String>) -> Self {
        self.moves.push((name.into(), None));
        self
    }

    /// Declares a move with an explicit input shortcut.
    pub fn with_move_shortcut(mut self, name: impl Into<String>, shortcut: impl Into<String>) -> Self {
        self.moves.push((name.into(), Some(shortcut.into())));
        self
    }

    /// Declares that `winner` defeats `loser`, described by `verb`.
    pub fn beats(
        mut self,
        winner: impl Into<String>,
        loser: impl Into<String>,
        verb: impl Into<String>,
    ) -> Self {
        self.rules.push(Rule {
            winner: winner.into(),
            loser: loser.into(),
            verb: verb.into(),
        });
        self
    }

    /// Validates the declarations and produces the catalog.
    #[instrument(skip(self), fields(moves = self.moves.len(), rules = self.rules.len()))]
    pub fn build(self) -> Result<Catalog, ConfigurationError> {
        let moves = self.resolve_moves()?;
        if moves.len() < 2 {
            warn!(count = moves.len(), "Rejected catalog with too few moves");
            return Err(ConfigurationError::TooFewMoves(moves.len()));
        }

        let index: HashMap<&str, usize> = moves
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name.as_str(), i))
            .collect();
        let lookup = |name: &str| {
            let key = name.trim().to_lowercase();
            index
                .get(key.as_str())
                .copied()
                .ok_or(ConfigurationError::UnknownMove(key))
        };

        let mut beats = vec![vec![false; moves.len()]; moves.len()];
        let mut verbs = BTreeMap::new();
        for rule in &self.rules {
            let winner = lookup(&rule.winner)?;
            let loser = lookup(&rule.loser)?;
            beats[winner][loser] = true;
            verbs.insert((MoveId(winner), MoveId(loser)), rule.verb.trim().to_string());
        }

        let catalog = Catalog {
            moves,
            beats,
            verbs,
        };

        if let Err(e) = CatalogInvariants::check_all(&catalog) {
            warn!(error = %e, "Rejected catalog");
            return Err(e);
        }

        info!(moves = catalog.len(), "Catalog built");
        Ok(catalog)
    }

    /// Normalizes names and shortcuts, rejecting blanks and duplicates.
    fn resolve_moves(&self) -> Result<Vec<MoveSpec>, ConfigurationError> {
        let mut specs: Vec<MoveSpec> = Vec::with_capacity(self.moves.len());
        for (raw_name, raw_shortcut) in &self.moves {
            let name = raw_name.trim().to_lowercase();
            let Some(first) = name.chars().next() else {
                return Err(ConfigurationError::EmptyName);
            };
            if specs.iter().any(|spec| spec.name == name) {
                return Err(ConfigurationError::DuplicateMove(name));
            }

            let shortcut = match raw_shortcut {
                Some(given) => given.trim().to_uppercase(),
                None => first.to_uppercase().collect(),
            };
            if shortcut.is_empty() {
                return Err(ConfigurationError::EmptyShortcut(name));
            }
            if let Some(holder) = specs.iter().find(|spec| spec.shortcut == shortcut) {
                return Err(ConfigurationError::DuplicateShortcut {
                    shortcut,
                    first: holder.name.clone(),
                    second: name,
                });
            }

            specs.push(MoveSpec { name, shortcut });
        }
        Ok(specs)
    }
}
