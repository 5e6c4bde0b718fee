use tracing::{debug, info};

use crate::card::Rank;
use crate::error::TurnError;
use crate::event::{GameEvent, GroupSource, Narrator};
use crate::player::{Player, PlayerId};
use crate::result::{GameOutcome, GameResult, TurnSummary};
use crate::rules::{self, AskOutcome, FishOutcome, Group};
use crate::strategy::Strategy;

use super::{Game, GameState};

/// Splits the seats into (active player, opponent).
fn seats(players: &mut [Player; 2], active: PlayerId) -> (&mut Player, &mut Player) {
    let [first, second] = players;
    if active == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

fn group_event(player: PlayerId, group: Group, source: GroupSource) -> GameEvent {
    GameEvent::GroupFormed {
        player,
        rank: group.rank,
        cards: group.cards,
        source,
        score: group.score,
    }
}

impl Game {
    /// Plays the current player's whole turn.
    ///
    /// The player keeps asking the opponent for ranks chosen by `strategy`
    /// while every ask is answered with at least one card. A miss, or an
    /// empty hand, sends the player fishing, and the turn passes to the
    /// opponent. After the second seat's turn the game ends if the deck is
    /// empty and the hands hold no rank that could still form a group.
    ///
    /// # Errors
    ///
    /// Returns an error if it is nobody's turn, or if `strategy` cancels.
    /// Asks already resolved in a cancelled turn stay applied.
    pub fn take_turn(
        &mut self,
        strategy: &mut dyn Strategy,
        narrator: &mut dyn Narrator,
    ) -> Result<TurnSummary, TurnError> {
        let GameState::Turn(id) = self.state else {
            return Err(TurnError::InvalidState);
        };
        let opponent_id = 1 - id;
        let mode = self.options.mode;
        let (player, opponent) = seats(&mut self.players, id);

        narrator.narrate(&GameEvent::TurnStarted { player: id });
        let mut summary = TurnSummary {
            player: id,
            successful_asks: 0,
            groups_formed: 0,
            drew: false,
        };

        let mut asking = true;
        while asking {
            if player.hand().is_empty() {
                narrator.narrate(&GameEvent::EmptyHand { player: id });
                break;
            }

            let rank = loop {
                let Some(rank) = strategy.choose_rank(player.hand()) else {
                    debug!(player = id, "strategy cancelled");
                    return Err(TurnError::Cancelled(id));
                };
                if player.hand().contains_rank(rank) {
                    break rank;
                }
                debug!(player = id, %rank, "rejected rank not in hand");
                narrator.narrate(&GameEvent::RankNotInHand { player: id, rank });
            };

            narrator.narrate(&GameEvent::Asked {
                player: id,
                opponent: opponent_id,
                rank,
            });

            match rules::ask(mode, player, opponent, rank) {
                AskOutcome::Miss => {
                    debug!(player = id, %rank, "ask missed");
                    narrator.narrate(&GameEvent::Miss { player: id, rank });
                    asking = false;
                }
                AskOutcome::Transferred { cards, group } => {
                    debug!(player = id, %rank, count = cards.len(), "ask answered");
                    summary.successful_asks += 1;
                    narrator.narrate(&GameEvent::Transferred {
                        from: opponent_id,
                        to: id,
                        cards,
                    });
                    let group_formed = group.is_some();
                    if let Some(group) = group {
                        summary.groups_formed += 1;
                        narrator.narrate(&group_event(id, group, GroupSource::Ask));
                    }
                    narrator.narrate(&GameEvent::GoAgain {
                        player: id,
                        group_formed,
                    });
                }
            }
        }

        match rules::go_fish(mode, player, &mut self.deck) {
            FishOutcome::DeckEmpty => {
                narrator.narrate(&GameEvent::DeckEmpty { player: id });
            }
            FishOutcome::Kept(card) => {
                summary.drew = true;
                debug!(player = id, remaining = self.deck.len(), "drew a card");
                narrator.narrate(&GameEvent::Drew { player: id, card });
            }
            FishOutcome::Formed { drawn, group } => {
                summary.drew = true;
                summary.groups_formed += 1;
                debug!(player = id, rank = %drawn.rank, "draw completed a group");
                narrator.narrate(&GameEvent::Drew {
                    player: id,
                    card: drawn,
                });
                narrator.narrate(&group_event(id, group, GroupSource::Draw));
            }
        }

        self.turns += 1;
        self.advance(id, narrator);
        Ok(summary)
    }

    /// Returns whether the cards left in both hands still hold a full group
    /// of some rank.
    fn group_possible(&self) -> bool {
        let size = self.options.mode.group_size();
        Rank::ALL.into_iter().any(|rank| {
            let held: usize = self.players.iter().map(|p| p.hand().count(rank)).sum();
            held >= size
        })
    }

    /// Passes the turn on, or ends the game once a full round finishes with
    /// the deck empty and no group left to complete.
    ///
    /// With a full 52-card deck this means both hands are empty too. A
    /// stacked deck can leave cards in hand that will never score.
    fn advance(&mut self, finished: PlayerId, narrator: &mut dyn Narrator) {
        let round_complete = usize::from(finished) + 1 == self.players.len();
        let exhausted = self.deck.is_empty() && !self.group_possible();

        if !(round_complete && exhausted) {
            self.state = GameState::Turn(1 - finished);
            return;
        }

        let mode = self.options.mode;
        let scores = [self.players[0].score(mode), self.players[1].score(mode)];
        let result = GameResult {
            mode,
            scores,
            outcome: GameOutcome::from_scores(scores[0], scores[1]),
            turns: self.turns,
        };
        let stranded: usize = self.players.iter().map(|p| p.hand().len()).sum();
        info!(
            mode = %mode,
            first = scores[0],
            second = scores[1],
            turns = self.turns,
            stranded,
            "game over"
        );
        self.state = GameState::GameOver;
        self.result = Some(result);
        narrator.narrate(&GameEvent::GameOver(result));
    }
}
