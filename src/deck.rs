//! The draw pile.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};
use crate::player::{Player, PlayerId};

/// An ordered pile of cards, consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the canonical 52-card deck.
    ///
    /// Suits are the outer loop (Hearts, Diamonds, Spades, Clubs) and ranks
    /// the inner loop (Ace through King), so the first card is the Ace of
    /// Hearts and the last is the King of Clubs.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a deck that draws `cards` front to back.
    #[must_use]
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Checks that `players` hands of `hand_size` cards can be dealt and
    /// returns the number of cards that takes.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the deck holds too few
    /// cards. An overflowing request reports `needed` as `usize::MAX`.
    pub fn can_deal(&self, players: usize, hand_size: usize) -> Result<usize, DealError> {
        let remaining = self.cards.len();
        match players.checked_mul(hand_size) {
            Some(needed) if needed <= remaining => Ok(needed),
            needed => Err(DealError::InsufficientCards {
                needed: needed.unwrap_or(usize::MAX),
                remaining,
            }),
        }
    }

    /// Deals `hand_size` cards to each player, one card per player per pass.
    ///
    /// Returns every dealt card with the seat that received it, in deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] without dealing anything if
    /// the deck cannot fill every hand.
    pub fn deal(
        &mut self,
        players: &mut [Player],
        hand_size: usize,
    ) -> Result<Vec<(PlayerId, Card)>, DealError> {
        let needed = self.can_deal(players.len(), hand_size)?;

        let mut dealt = Vec::with_capacity(needed);
        for (index, card) in self.cards.drain(..needed).enumerate() {
            let seat = index % players.len();
            players[seat].add_card(card);
            dealt.push((seat as PlayerId, card));
        }

        debug!(
            players = players.len(),
            hand_size,
            remaining = self.cards.len(),
            "dealt hands"
        );
        Ok(dealt)
    }

    /// Returns the cards left, front first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
