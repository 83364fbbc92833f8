//! Error types for rock-paper-scissors games.
//!
//! Each failure family has its own enum so callers can react to exactly the
//! cases they care about. [`RpsError`] wraps all of them for operations that
//! can fail in more than one way.

use derive_more::{Display, From};

/// A submitted move is not part of the active catalog.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidMoveError {
    /// Text input that matches no move name or shortcut.
    #[display("{input:?} is not a move in {game}")]
    UnknownInput {
        /// The rejected input, as typed.
        input: String,
        /// Name of the active game.
        game: String,
    },

    /// A move handle taken from a larger catalog.
    #[display("Move #{index} does not exist in a {size}-move game")]
    ForeignMove {
        /// Index of the rejected handle.
        index: usize,
        /// Number of moves in the active catalog.
        size: usize,
    },
}

impl std::error::Error for InvalidMoveError {}

/// A catalog could not be built from the supplied moves and rules.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationError {
    /// A move was declared with a blank name.
    #[display("Move names must not be empty")]
    EmptyName,

    /// A move was declared with a blank shortcut.
    #[display("Move {_0} has an empty shortcut")]
    EmptyShortcut(String),

    /// The same move name was declared twice.
    #[display("Move {_0} is declared more than once")]
    DuplicateMove(String),

    /// Two moves would be selected by the same input.
    #[display("Shortcut {shortcut:?} is shared by {first} and {second}")]
    DuplicateShortcut {
        /// The contested shortcut.
        shortcut: String,
        /// Move that claimed the shortcut first.
        first: String,
        /// Move that claimed it again.
        second: String,
    },

    /// A rule refers to a move that was never declared.
    #[display("Unknown move {_0:?}")]
    UnknownMove(String),

    /// A move was declared to defeat itself.
    #[display("{_0} cannot defeat itself")]
    SelfDefeat(String),

    /// Two moves were each declared to defeat the other.
    #[display("{first} and {second} both defeat each other")]
    Contradiction {
        /// First move of the pair.
        first: String,
        /// Second move of the pair.
        second: String,
    },

    /// Neither move of a pair defeats the other.
    #[display("Neither {first} nor {second} defeats the other")]
    Incomplete {
        /// First move of the pair.
        first: String,
        /// Second move of the pair.
        second: String,
    },

    /// Fewer than two moves were declared.
    #[display("A game needs at least two moves, found {_0}")]
    TooFewMoves(usize),

    /// A variant file could not be read.
    #[display("Failed to read variant file: {_0}")]
    Read(String),

    /// A variant file is not valid TOML for a variant.
    #[display("Failed to parse variant file: {_0}")]
    Parse(String),

    /// A catalog could not be written out as a variant file.
    #[display("Failed to serialize variant: {_0}")]
    Serialize(String),
}

impl std::error::Error for ConfigurationError {}

/// An operation was attempted out of the expected turn order or lifecycle
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameSequenceError {
    /// A round was started while another one is still open.
    #[display("This round has already begun")]
    AlreadyBegun,

    /// A round operation was attempted before the round began.
    #[display("No round is in progress")]
    NotBegun,

    /// A seat tried to move twice in the same round.
    #[display("Seat {_0} has already moved this round")]
    AlreadyMoved(usize),

    /// A move was submitted for a seat the round doesn't have.
    #[display("Seat {seat} does not exist in a {seats}-seat round")]
    NoSuchSeat {
        /// The requested seat.
        seat: usize,
        /// Number of seats in the round.
        seats: usize,
    },

    /// The round was resolved before every seat moved.
    #[display("Still waiting on {pending} of {seats} moves")]
    MovesPending {
        /// Seats that have not moved yet.
        pending: usize,
        /// Number of seats in the round.
        seats: usize,
    },

    /// The round was already resolved.
    #[display("This round has already been resolved")]
    AlreadyResolved,

    /// The outcome was requested before the round was resolved.
    #[display("This round hasn't been resolved yet")]
    NotResolved,

    /// Fewer than two moves were handed to the engine.
    #[display("A round needs at least two moves, got {_0}")]
    TooFewMoves(usize),
}

impl std::error::Error for GameSequenceError {}

/// Any error raised by the game library.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RpsError {
    /// A move outside the active catalog.
    #[display("{_0}")]
    InvalidMove(InvalidMoveError),

    /// A catalog that failed validation.
    #[display("{_0}")]
    Configuration(ConfigurationError),

    /// A lifecycle operation out of order.
    #[display("{_0}")]
    Sequence(GameSequenceError),
}

impl std::error::Error for RpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpsError::InvalidMove(e) => Some(e),
            RpsError::Configuration(e) => Some(e),
            RpsError::Sequence(e) => Some(e),
        }
    }
}
