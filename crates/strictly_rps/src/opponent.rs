//! Computer opponents.

use crate::catalog::{Catalog, MoveId};
use derive_new::new;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Something that picks moves for the computer's seat.
pub trait Opponent {
    /// Picks a move from `catalog`.
    fn choose(&mut self, catalog: &Catalog) -> MoveId;

    /// Display name of the opponent.
    fn name(&self) -> &str;
}

/// Picks uniformly at random.
///
/// Seeded opponents replay the same sequence of choices.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates an opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, catalog: &Catalog) -> MoveId {
        let choice = MoveId::new(self.rng.gen_range(0..catalog.len().max(1)));
        debug!(choice = catalog.name(choice), "Random opponent chose");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always plays the same move.
#[derive(Debug, Clone, Copy, new)]
pub struct FixedOpponent {
    choice: MoveId,
}

impl Opponent for FixedOpponent {
    fn choose(&mut self, _catalog: &Catalog) -> MoveId {
        self.choice
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Walks through the catalog in order, wrapping around.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclingOpponent {
    next: usize,
}

impl Opponent for CyclingOpponent {
    fn choose(&mut self, catalog: &Catalog) -> MoveId {
        let choice = MoveId::new(self.next % catalog.len().max(1));
        self.next = choice.index() + 1;
        choice
    }

    fn name(&self) -> &str {
        "cycle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_seeded_opponents_agree() {
        let catalog = Variant::LizardSpock.catalog().unwrap();
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        for _ in 0..50 {
            let choice = a.choose(&catalog);
            assert!(catalog.contains(choice));
            assert_eq!(choice, b.choose(&catalog));
        }
    }

    #[test]
    fn test_cycling_wraps() {
        let catalog = Variant::Classic.catalog().unwrap();
        let mut opponent = CyclingOpponent::default();
        let picks: Vec<usize> = (0..4).map(|_| opponent.choose(&catalog).index()).collect();
        assert_eq!(picks, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_fixed_repeats() {
        let catalog = Variant::Classic.catalog().unwrap();
        let mut opponent = FixedOpponent::new(MoveId::new(1));
        assert_eq!(opponent.choose(&catalog), MoveId::new(1));
        assert_eq!(opponent.choose(&catalog), MoveId::new(1));
    }
}
