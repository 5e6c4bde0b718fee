//! How a player picks the rank to ask for.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::hand::Hand;

/// Chooses the rank a player asks for.
///
/// The game only consults a strategy while its player holds at least one
/// card. A returned rank that is not in `hand` is rejected and the strategy
/// is asked again. Returning `None` cancels the game.
pub trait Strategy {
    /// Picks a rank from `hand`, or `None` to stop playing.
    fn choose_rank(&mut self, hand: &Hand) -> Option<Rank>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn choose_rank(&mut self, hand: &Hand) -> Option<Rank> {
        (**self).choose_rank(hand)
    }
}

/// An automated player that asks for a uniformly random rank it holds.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = ChaCha8Rng> {
    rng: R,
}

impl RandomStrategy<ChaCha8Rng> {
    /// Creates a strategy driven by a `ChaCha8` generator seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy driven by `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_rank(&mut self, hand: &Hand) -> Option<Rank> {
        hand.ranks().choose(&mut self.rng).copied()
    }
}
