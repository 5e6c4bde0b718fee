//! Game state types.

use crate::player::PlayerId;

/// Game state.
///
/// A game moves through `Dealing`, `InitialScan`, alternating `Turn`s, and
/// finally `GameOver`; it never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting to shuffle and deal.
    Dealing,
    /// Hands are dealt and must be checked for groups once.
    InitialScan,
    /// Waiting for the given player to take a turn.
    Turn(PlayerId),
    /// The deck is empty and no group can still form; the result is final.
    GameOver,
}

impl GameState {
    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub const fn current_player(self) -> Option<PlayerId> {
        match self {
            Self::Turn(player) => Some(player),
            _ => None,
        }
    }
}
