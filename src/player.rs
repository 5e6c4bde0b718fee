//! Players and their score counters.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::hand::Hand;
use crate::options::GameMode;

/// Seat index of a player (`0` deals and plays first).
pub type PlayerId = u8;

/// A seated player: a name, a hand, and one score counter per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    pairs: u32,
    books: u32,
}

impl Player {
    /// Creates a player with an empty hand and no score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            pairs: 0,
            books: 0,
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Adds several cards to the hand.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.add_cards(cards);
    }

    /// Removes and returns one card of `rank`, if held.
    pub fn remove_one(&mut self, rank: Rank) -> Option<Card> {
        self.hand.remove_one(rank)
    }

    /// Removes and returns every card of `rank`.
    pub fn remove_all(&mut self, rank: Rank) -> Vec<Card> {
        self.hand.remove_all(rank)
    }

    pub(crate) fn remove_n(&mut self, rank: Rank, n: usize) -> Option<Vec<Card>> {
        self.hand.remove_n(rank, n)
    }

    /// Increments the counter scored by `mode` and returns its new value.
    pub fn increment_score(&mut self, mode: GameMode) -> u32 {
        let counter = match mode {
            GameMode::Pairs => &mut self.pairs,
            GameMode::Books => &mut self.books,
        };
        *counter += 1;
        *counter
    }

    /// Returns the counter scored by `mode`.
    #[must_use]
    pub const fn score(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Pairs => self.pairs,
            GameMode::Books => self.books,
        }
    }

    /// Returns the number of pairs made.
    #[must_use]
    pub const fn pairs(&self) -> u32 {
        self.pairs
    }

    /// Returns the number of books made.
    #[must_use]
    pub const fn books(&self) -> u32 {
        self.books
    }
}
