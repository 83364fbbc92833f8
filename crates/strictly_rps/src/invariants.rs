//! First-class invariants of the beats-relation.
//!
//! Invariants are logical properties every catalog must satisfy. They are
//! checked when a catalog is built and can be tested independently.

use crate::catalog::{Catalog, MoveId};
use crate::error::ConfigurationError;
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks the property, describing the first offending pair on failure.
    fn check(state: &S) -> Result<(), ConfigurationError>;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;

    /// Returns true if the invariant holds.
    fn holds(state: &S) -> bool {
        Self::check(state).is_ok()
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples; members are checked in order and the first
/// violation is returned.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), ConfigurationError>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), ConfigurationError> {
        I1::check(state)?;
        I2::check(state)?;
        I3::check(state)?;
        Ok(())
    }
}

/// Every invariant a built catalog satisfies.
pub type CatalogInvariants = (Irreflexive, Antisymmetric, Total);

/// Unordered pairs of distinct moves.
fn pairs(catalog: &Catalog) -> impl Iterator<Item = (MoveId, MoveId)> + '_ {
    catalog
        .moves()
        .flat_map(move |a| catalog.moves().filter(move |&b| a < b).map(move |b| (a, b)))
}

/// Invariant: no move defeats itself.
pub struct Irreflexive;

impl Invariant<Catalog> for Irreflexive {
    #[instrument(skip(catalog))]
    fn check(catalog: &Catalog) -> Result<(), ConfigurationError> {
        match catalog.moves().find(|&m| catalog.defeats(m, m)) {
            Some(m) => Err(ConfigurationError::SelfDefeat(catalog.name(m).to_string())),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "No move defeats itself"
    }
}

/// Invariant: of two distinct moves, at most one defeats the other.
pub struct Antisymmetric;

impl Invariant<Catalog> for Antisymmetric {
    #[instrument(skip(catalog))]
    fn check(catalog: &Catalog) -> Result<(), ConfigurationError> {
        match pairs(catalog).find(|&(a, b)| catalog.defeats(a, b) && catalog.defeats(b, a)) {
            Some((a, b)) => Err(ConfigurationError::Contradiction {
                first: catalog.name(a).to_string(),
                second: catalog.name(b).to_string(),
            }),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "Two distinct moves never defeat each other"
    }
}

/// Invariant: of two distinct moves, at least one defeats the other.
pub struct Total;

impl Invariant<Catalog> for Total {
    #[instrument(skip(catalog))]
    fn check(catalog: &Catalog) -> Result<(), ConfigurationError> {
        match pairs(catalog).find(|&(a, b)| !catalog.defeats(a, b) && !catalog.defeats(b, a)) {
            Some((a, b)) => Err(ConfigurationError::Incomplete {
                first: catalog.name(a).to_string(),
                second: catalog.name(b).to_string(),
            }),
            None => Ok(()),
        }
    }

    fn description() -> &'static str {
        "Of two distinct moves, one always defeats the other"
    }
}
