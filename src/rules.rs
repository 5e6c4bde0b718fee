//! Turn operations shared by both rule variants.
//!
//! Every function here is parameterised by [`GameMode`]: the mode's group
//! size decides how many same-rank cards score, and its transfer cap decides
//! how many cards an opponent hands over for one ask. The [`Game`] state
//! machine sequences these operations; they are public so that single
//! situations can be set up and resolved directly.
//!
//! [`Game`]: crate::Game

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::options::GameMode;
use crate::player::Player;

/// A scoring group removed from a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Rank shared by every card in the group.
    pub rank: Rank,
    /// The removed cards, the holder's own cards first.
    pub cards: Vec<Card>,
    /// The holder's score after this group.
    pub score: u32,
}

/// What happened when a player asked for a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The opponent held no card of the rank.
    Miss,
    /// The opponent handed over at least one card.
    Transferred {
        /// Cards handed over.
        cards: Vec<Card>,
        /// The group completed by the transfer, if any.
        group: Option<Group>,
    },
}

impl AskOutcome {
    /// Returns whether the asking player takes another ask.
    #[must_use]
    pub const fn goes_again(&self) -> bool {
        matches!(self, Self::Transferred { .. })
    }
}

/// What happened when a player went fishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FishOutcome {
    /// The deck was exhausted; nothing was drawn.
    DeckEmpty,
    /// The drawn card went into the hand.
    Kept(Card),
    /// The drawn card completed a group and left play with it.
    Formed {
        /// The card drawn.
        drawn: Card,
        /// The completed group, including the drawn card last.
        group: Group,
    },
}

/// Removes every complete group from `player`'s hand and scores it.
///
/// The hand is searched from its first position for a rank held at least
/// group-size times; the first such rank loses its first group-size cards
/// and the search restarts on the reduced hand until no rank qualifies.
pub fn scan(mode: GameMode, player: &mut Player) -> Vec<Group> {
    let size = mode.group_size();
    let mut groups = Vec::new();
    while let Some(rank) = player.hand().first_group(size) {
        let Some(cards) = player.remove_n(rank, size) else {
            break;
        };
        let score = player.increment_score(mode);
        groups.push(Group { rank, cards, score });
    }
    groups
}

/// Resolves `asker` asking `giver` for `rank`.
///
/// The giver hands over up to the mode's transfer cap. If the asker's own
/// cards of that rank plus the handed-over cards make a group, those cards
/// leave play and the asker scores; otherwise the handed-over cards join the
/// asker's hand.
pub fn ask(mode: GameMode, asker: &mut Player, giver: &mut Player, rank: Rank) -> AskOutcome {
    let mut given = Vec::with_capacity(mode.transfer_cap());
    while given.len() < mode.transfer_cap() {
        match giver.remove_one(rank) {
            Some(card) => given.push(card),
            None => break,
        }
    }
    if given.is_empty() {
        return AskOutcome::Miss;
    }

    let group = complete_group(mode, asker, rank, &given);
    if group.is_none() {
        asker.add_cards(given.iter().copied());
    }
    AskOutcome::Transferred {
        cards: given,
        group,
    }
}

/// Draws one card for `player` and resolves it against the hand.
pub fn go_fish(mode: GameMode, player: &mut Player, deck: &mut Deck) -> FishOutcome {
    let Ok(drawn) = deck.draw() else {
        return FishOutcome::DeckEmpty;
    };
    match complete_group(mode, player, drawn.rank, &[drawn]) {
        Some(group) => FishOutcome::Formed { drawn, group },
        None => {
            player.add_card(drawn);
            FishOutcome::Kept(drawn)
        }
    }
}

/// Scores a group made of `incoming` plus enough of the holder's own cards,
/// if the holder has enough. `incoming` is never added to the hand here.
fn complete_group(
    mode: GameMode,
    holder: &mut Player,
    rank: Rank,
    incoming: &[Card],
) -> Option<Group> {
    let own_needed = mode.group_size().checked_sub(incoming.len())?;
    let mut cards = holder.remove_n(rank, own_needed)?;
    cards.extend_from_slice(incoming);
    let score = holder.increment_score(mode);
    Some(Group { rank, cards, score })
}
