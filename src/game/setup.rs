use tracing::debug;

use crate::error::{DealError, ScanError};
use crate::event::{GameEvent, GroupSource, Narrator};
use crate::player::PlayerId;
use crate::rules;

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck (unless disabled in the options) and deals the
    /// opening hands, one card per player per pass starting with seat 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the deck
    /// cannot fill both hands. A failed deal leaves the deck untouched.
    pub fn deal(&mut self, narrator: &mut dyn Narrator) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let hand_size = usize::from(self.options.hand_size);
        self.deck.can_deal(self.players.len(), hand_size)?;

        if self.options.shuffle {
            self.deck.shuffle(&mut self.rng);
        }

        narrator.narrate(&GameEvent::Dealing { hand_size });
        let dealt = self.deck.deal(&mut self.players, hand_size)?;
        for (player, card) in dealt {
            narrator.narrate(&GameEvent::Dealt { player, card });
        }

        self.state = GameState::InitialScan;
        Ok(())
    }

    /// Removes and scores the pairs or books each player was dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands have not just been dealt.
    pub fn initial_scan(&mut self, narrator: &mut dyn Narrator) -> Result<(), ScanError> {
        if self.state != GameState::InitialScan {
            return Err(ScanError::InvalidState);
        }

        let mode = self.options.mode;
        narrator.narrate(&GameEvent::ScanStarted { mode });

        for (seat, player) in self.players.iter_mut().enumerate() {
            let id = seat as PlayerId;
            for group in rules::scan(mode, player) {
                debug!(player = id, rank = %group.rank, score = group.score, "group in dealt hand");
                narrator.narrate(&GameEvent::GroupFormed {
                    player: id,
                    rank: group.rank,
                    cards: group.cards,
                    source: GroupSource::Deal,
                    score: group.score,
                });
            }
            narrator.narrate(&GameEvent::ScanFinished {
                player: id,
                score: player.score(mode),
            });
        }

        self.state = GameState::Turn(0);
        Ok(())
    }
}
