//! Game result types.

use crate::options::GameMode;
use crate::player::PlayerId;

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player with the strictly higher score.
    Winner(PlayerId),
    /// Both players scored the same.
    Draw,
}

impl GameOutcome {
    /// Decides the outcome from the seat 0 and seat 1 scores.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOutcome;
    ///
    /// assert_eq!(GameOutcome::from_scores(2, 3), GameOutcome::Winner(1));
    /// assert_eq!(GameOutcome::from_scores(2, 2), GameOutcome::Draw);
    /// ```
    #[must_use]
    pub const fn from_scores(first: u32, second: u32) -> Self {
        if first > second {
            Self::Winner(0)
        } else if second > first {
            Self::Winner(1)
        } else {
            Self::Draw
        }
    }

    /// Returns the winning seat, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Self::Winner(player) => Some(player),
            Self::Draw => None,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Rules the game was played under.
    pub mode: GameMode,
    /// Score of each seat in the mode's unit (pairs or books).
    pub scores: [u32; 2],
    /// Who won.
    pub outcome: GameOutcome,
    /// Number of turns taken.
    pub turns: u32,
}

/// Summary of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    /// The player who took the turn.
    pub player: PlayerId,
    /// Asks that were answered with at least one card.
    pub successful_asks: u32,
    /// Pairs or books completed during the turn.
    pub groups_formed: u32,
    /// Whether the turn ended with a card drawn from the deck.
    pub drew: bool,
}
