//! Property tests over shuffles and whole random games.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gofish::{DECK_SIZE, Deck, Game, GameMode, GameOptions, RandomStrategy};

/// Generous bound; real games take a few dozen turns.
const MAX_TURNS: u32 = 2_000;

fn cards_in_play(game: &Game) -> usize {
    let mode = game.options().mode;
    let in_hands: usize = game.players().iter().map(|p| p.hand().len()).sum();
    let scored: u32 = game.players().iter().map(|p| p.score(mode)).sum();
    game.cards_remaining() + in_hands + scored as usize * mode.group_size()
}

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::Pairs), Just(GameMode::Books)]
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let cards = deck.cards();
        prop_assert_eq!(cards.len(), DECK_SIZE);
        let unique: HashSet<_> = cards.iter().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        let fresh: HashSet<_> = Deck::new().cards().into_iter().collect();
        prop_assert_eq!(unique, fresh.iter().collect::<HashSet<_>>());
    }

    #[test]
    fn cards_are_conserved_and_games_end(
        seed in any::<u64>(),
        mode in mode_strategy(),
        hand_size in 1u8..=10,
    ) {
        let options = GameOptions::default()
            .with_mode(mode)
            .with_hand_size(hand_size);
        let mut game = Game::new(options, ["A", "B"], seed);
        let mut strategies = [
            RandomStrategy::seeded(seed.wrapping_add(1)),
            RandomStrategy::seeded(seed.wrapping_add(2)),
        ];

        game.deal(&mut ()).unwrap();
        prop_assert_eq!(cards_in_play(&game), DECK_SIZE);
        game.initial_scan(&mut ()).unwrap();
        prop_assert_eq!(cards_in_play(&game), DECK_SIZE);

        while let Some(player) = game.current_player() {
            prop_assert!(game.turns() < MAX_TURNS);
            let strategy = &mut strategies[usize::from(player)];
            game.take_turn(strategy, &mut ()).unwrap();
            prop_assert_eq!(cards_in_play(&game), DECK_SIZE);

            let size = mode.group_size();
            if game.cards_remaining() == 0 {
                for seat in game.players() {
                    prop_assert!(seat.hand().first_group(size).is_none());
                }
            }
        }

        let result = game.result().unwrap();
        prop_assert_eq!(
            (result.scores[0] + result.scores[1]) as usize * mode.group_size(),
            DECK_SIZE
        );
    }
}
