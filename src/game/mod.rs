//! Game engine and state management.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{PlayError, ResultError};
use crate::event::Narrator;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::GameResult;
use crate::strategy::Strategy;

mod actions;
mod setup;
pub mod state;

pub use state::GameState;

/// A two-player Go Fish game.
///
/// The game owns the deck and both players and enforces the order
/// dealing → initial scan → alternating turns → game over. Players choose
/// ranks through a [`Strategy`] and every step is reported to a
/// [`Narrator`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seat 0 and seat 1.
    players: [Player; 2],
    /// Turns completed.
    turns: u32,
    /// Result, once the game is over.
    result: Option<GameResult>,
    /// Shuffle generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with a fresh 52-card deck, shuffled with `seed` when
    /// dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), ["You", "Computer"], 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// ```
    #[must_use]
    pub fn new<S: Into<String>>(options: GameOptions, names: [S; 2], seed: u64) -> Self {
        Self::with_deck(options, names, Deck::new(), seed)
    }

    /// Creates a game that deals from `deck`.
    ///
    /// Combined with [`GameOptions::with_shuffle`]`(false)` the deck is dealt
    /// exactly in the given order.
    #[must_use]
    pub fn with_deck<S: Into<String>>(
        options: GameOptions,
        names: [S; 2],
        deck: Deck,
        seed: u64,
    ) -> Self {
        Self {
            deck,
            options,
            state: GameState::Dealing,
            players: names.map(Player::new),
            turns: 0,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays the game to the end from whatever state it is in.
    ///
    /// `strategies[n]` chooses ranks for seat `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing fails or a strategy cancels.
    pub fn play(
        &mut self,
        mut strategies: [&mut dyn Strategy; 2],
        narrator: &mut dyn Narrator,
    ) -> Result<GameResult, PlayError> {
        if self.state == GameState::Dealing {
            self.deal(narrator)?;
        }
        if self.state == GameState::InitialScan {
            self.initial_scan(narrator)?;
        }
        while let GameState::Turn(player) = self.state {
            self.take_turn(&mut *strategies[usize::from(player)], narrator)?;
        }
        Ok(self.result()?)
    }

    /// Returns the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not over.
    pub fn result(&self) -> Result<GameResult, ResultError> {
        self.result.ok_or(ResultError::InvalidState)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Option<PlayerId> {
        self.state.current_player()
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns both players, seat 0 first.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(seat))
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of turns completed.
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }
}
