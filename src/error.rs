//! Error types for game operations.

use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck cannot supply a full hand to every player.
    #[error("not enough cards to deal: need {needed}, deck has {remaining}")]
    InsufficientCards {
        /// Cards the deal requires.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during the initial hand scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Invalid game state for scanning.
    #[error("invalid game state for the initial scan")]
    InvalidState,
}

/// Errors that can occur while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for taking a turn.
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// The player's strategy stopped choosing ranks.
    #[error("player {0} cancelled the game")]
    Cancelled(PlayerId),
}

/// Errors that can occur when reading the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// The game is not over yet.
    #[error("the game is not over")]
    InvalidState,
}

/// Errors that can occur while playing a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The initial scan failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// A turn failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// The game stopped without a result.
    #[error(transparent)]
    Result(#[from] ResultError),
}

/// A rank token did not name a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank: expected 2-10, J, Q, K or A")]
pub struct ParseRankError;

/// A game mode token did not name a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid game mode: expected pairs or books")]
pub struct ParseModeError;
