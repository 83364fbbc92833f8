//! Strictly RPS - rock, paper, scissors and its variants
//!
//! A move catalog holds the beats-relation of a game; the engine resolves
//! rounds against it. Variants are plain configuration: build a catalog with
//! [`CatalogBuilder`], start from a [`Variant`] preset, or load a TOML
//! [`VariantConfig`].
//!
//! # Architecture
//!
//! - **Catalog**: named moves, shortcuts, verbs and the validated relation
//! - **Engine**: stateless round resolution for two or more seats
//! - **Session**: round lifecycle and player-versus-computer matches
//! - **Opponent**: computer move selection
//!
//! # Example
//!
//! ```
//! use strictly_rps::{Engine, RoundOutcome, Variant};
//!
//! # fn example() -> Result<(), strictly_rps::RpsError> {
//! let engine = Engine::new(Variant::Classic.catalog()?);
//! let rock = engine.catalog().parse("rock")?;
//! let scissors = engine.catalog().parse("S")?;
//!
//! let outcome = engine.resolve_round(&[rock, scissors])?;
//! assert_eq!(outcome.winners(), &[0]);
//! assert!(!matches!(outcome, RoundOutcome::Tie));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod engine;
mod error;
mod invariants;
mod opponent;
mod session;
mod variant;

pub mod narrate;

// Crate-level exports - Catalog
pub use catalog::{Catalog, CatalogBuilder, DEFAULT_VERB, MoveId, MoveSpec};

// Crate-level exports - Invariants
pub use invariants::{Antisymmetric, CatalogInvariants, Invariant, InvariantSet, Irreflexive, Total};

// Crate-level exports - Variants
pub use variant::{Interaction, MoveConfig, Variant, VariantConfig};

// Crate-level exports - Engine
pub use engine::{Engine, RoundOutcome};

// Crate-level exports - Sessions
pub use session::{Match, OPPONENT_SEAT, PLAYER_SEAT, Record, Round, RoundReport, Stage, Verdict};

// Crate-level exports - Opponents
pub use opponent::{CyclingOpponent, FixedOpponent, Opponent, RandomOpponent};

// Crate-level exports - Errors
pub use error::{ConfigurationError, GameSequenceError, InvalidMoveError, RpsError};
