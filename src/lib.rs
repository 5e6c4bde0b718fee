//! A two-player Go Fish engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full game flow: dealing,
//! the one-time check of dealt hands, alternating turns of asking and
//! fishing, and the final score. Two rule variants are supported through
//! [`GameMode`]: *pairs* (ask for one card, score 2 of a kind) and *books*
//! (ask for every card of a rank, score 4 of a kind).
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameMode, GameOptions, RandomStrategy};
//!
//! let options = GameOptions::default().with_mode(GameMode::Books);
//! let mut game = Game::new(options, ["Alice", "Bob"], 42);
//! let mut alice = RandomStrategy::seeded(1);
//! let mut bob = RandomStrategy::seeded(2);
//!
//! let result = game.play([&mut alice, &mut bob], &mut ()).unwrap();
//! assert_eq!(result.scores[0] + result.scores[1], 13);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    DealError, DeckError, ParseModeError, ParseRankError, PlayError, ResultError, ScanError,
    TurnError,
};
pub use event::{GameEvent, GroupSource, Narrator};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::{GameMode, GameOptions};
pub use player::{Player, PlayerId};
pub use result::{GameOutcome, GameResult, TurnSummary};
pub use strategy::{RandomStrategy, Strategy};
