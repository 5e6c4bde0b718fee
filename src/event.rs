//! Narration of game progress.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::options::GameMode;
use crate::player::PlayerId;
use crate::result::GameResult;

/// Where a scoring group was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    /// Already present in the dealt hand.
    Deal,
    /// Completed by cards handed over after an ask.
    Ask,
    /// Completed by the card drawn when fishing.
    Draw,
}

/// Something observable that happened during a game.
///
/// Events carry every card involved, including ones the other player should
/// not see; front ends decide what to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Dealing is about to start.
    Dealing {
        /// Cards each player will receive.
        hand_size: usize,
    },
    /// A card was dealt.
    Dealt {
        /// Receiving player.
        player: PlayerId,
        /// The card.
        card: Card,
    },
    /// Dealt hands are about to be checked for groups.
    ScanStarted {
        /// Rules in play.
        mode: GameMode,
    },
    /// A player's dealt hand has been checked.
    ScanFinished {
        /// The player.
        player: PlayerId,
        /// Score after the check.
        score: u32,
    },
    /// A pair or book was completed and left play.
    GroupFormed {
        /// Scoring player.
        player: PlayerId,
        /// Rank of the group.
        rank: Rank,
        /// Cards removed from play.
        cards: Vec<Card>,
        /// How the group was completed.
        source: GroupSource,
        /// Score after the group.
        score: u32,
    },
    /// A player's turn started.
    TurnStarted {
        /// The player.
        player: PlayerId,
    },
    /// The player to act holds no cards and must fish.
    EmptyHand {
        /// The player.
        player: PlayerId,
    },
    /// The player's strategy picked a rank it does not hold.
    RankNotInHand {
        /// The player.
        player: PlayerId,
        /// The rejected rank.
        rank: Rank,
    },
    /// A player asked the opponent for a rank.
    Asked {
        /// Asking player.
        player: PlayerId,
        /// Asked player.
        opponent: PlayerId,
        /// Requested rank.
        rank: Rank,
    },
    /// Cards were handed over after an ask.
    Transferred {
        /// Giving player.
        from: PlayerId,
        /// Receiving player.
        to: PlayerId,
        /// Cards handed over.
        cards: Vec<Card>,
    },
    /// An ask succeeded and the player asks again.
    GoAgain {
        /// The player.
        player: PlayerId,
        /// Whether the transfer completed a group.
        group_formed: bool,
    },
    /// The opponent had nothing of the asked rank.
    Miss {
        /// Asking player.
        player: PlayerId,
        /// Requested rank.
        rank: Rank,
    },
    /// A player drew a card from the deck.
    Drew {
        /// Drawing player.
        player: PlayerId,
        /// The card drawn.
        card: Card,
    },
    /// A player had to fish but the deck was empty.
    DeckEmpty {
        /// The player.
        player: PlayerId,
    },
    /// The game is over.
    GameOver(GameResult),
}

/// Receives [`GameEvent`]s as the game progresses.
pub trait Narrator {
    /// Handles one event.
    fn narrate(&mut self, event: &GameEvent);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn narrate(&mut self, event: &GameEvent) {
        (**self).narrate(event);
    }
}

/// Discards every event.
impl Narrator for () {
    fn narrate(&mut self, _event: &GameEvent) {}
}

/// Records every event in order.
impl Narrator for Vec<GameEvent> {
    fn narrate(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
