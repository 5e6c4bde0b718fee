//! A player's hand of cards.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// An unordered multiset of cards that remembers insertion order.
///
/// Order carries no meaning for scoring, but it drives how hands are listed
/// and which card goes first when only some cards of a rank are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand, keeping their order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Removes and returns the first card of `rank`, if any.
    pub fn remove_one(&mut self, rank: Rank) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.rank == rank)?;
        Some(self.cards.remove(index))
    }

    /// Removes and returns every card of `rank`.
    pub fn remove_all(&mut self, rank: Rank) -> Vec<Card> {
        let mut removed = Vec::new();
        self.cards.retain(|card| {
            if card.rank == rank {
                removed.push(*card);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Removes and returns the first `n` cards of `rank`.
    ///
    /// Returns `None` and leaves the hand untouched if fewer than `n` are held.
    pub fn remove_n(&mut self, rank: Rank, n: usize) -> Option<Vec<Card>> {
        if self.count(rank) < n {
            return None;
        }
        let mut removed = Vec::with_capacity(n);
        while removed.len() < n {
            removed.push(self.remove_one(rank)?);
        }
        Some(removed)
    }

    /// Returns the number of cards of `rank`.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Returns the distinct ranks held, in the order they first appear.
    #[must_use]
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = Vec::new();
        for card in &self.cards {
            if !ranks.contains(&card.rank) {
                ranks.push(card.rank);
            }
        }
        ranks
    }

    /// Returns the first rank, by hand position, held at least `size` times.
    #[must_use]
    pub fn first_group(&self, size: usize) -> Option<Rank> {
        self.cards
            .iter()
            .map(|card| card.rank)
            .find(|&rank| self.count(rank) >= size)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Lists the hand in short form, e.g. `[AH, 10C, QS]`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card.short())?;
        }
        f.write_str("]")
    }
}
