//! Terminal front end tests, driven from in-memory buffers.

use std::io::{self, BufRead, Cursor, Write};

use gofish::console::{Console, ConsoleNarrator};
use gofish::{
    Card, Deck, Game, GameEvent, GameMode, GameOptions, GameOutcome, GameResult, Hand, Narrator,
    Rank, Strategy, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn console(input: &str) -> Console<Cursor<&[u8]>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes()), Vec::new())
}

fn output_of<R: BufRead>(console: Console<R, Vec<u8>>) -> String {
    String::from_utf8(console.into_inner().1).unwrap()
}

/// A writer whose every write fails.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

struct Always(Rank);

impl Strategy for Always {
    fn choose_rank(&mut self, _hand: &Hand) -> Option<Rank> {
        Some(self.0)
    }
}

#[test]
fn name_prompt_skips_blank_lines() {
    let mut console = console("\n   \nAlice\n");
    assert_eq!(console.prompt_name().unwrap(), "Alice");
    assert_eq!(
        output_of(console).matches("Please enter your name: ").count(),
        3
    );
}

#[test]
fn mode_prompt_retries_until_valid() {
    let mut console = console("chess\nBOOKS\n");
    assert_eq!(console.prompt_mode("Alice").unwrap(), GameMode::Books);

    let output = output_of(console);
    assert!(output.starts_with("Welcome, Alice! This game has two possible styles"));
    assert!(output.contains("Not a valid choice! Try 'pairs' or 'books'\n"));
}

#[test]
fn prompts_fail_when_input_ends() {
    assert!(console("").prompt_name().is_err());
    assert!(console("chess\n").prompt_mode("Alice").is_err());
}

#[test]
fn rank_prompt_shows_hand_and_retries() {
    let hand: Hand = [card(Rank::Queen, Suit::Hearts), card(Rank::Ten, Suit::Clubs)]
        .into_iter()
        .collect();
    let mut console = console("x\nq\n");

    assert_eq!(console.choose_rank(&hand), Some(Rank::Queen));

    let output = output_of(console);
    assert!(output.starts_with("Here's your hand:\n\t[QH, 10C]\n"));
    assert!(output.contains("Not a valid choice! Try 2-10, J, Q, K, or A: "));
}

#[test]
fn rank_prompt_cancels_on_end_of_input() {
    let hand: Hand = [card(Rank::Two, Suit::Hearts)].into_iter().collect();
    assert_eq!(console("").choose_rank(&hand), None);
    assert_eq!(console("zz\n").choose_rank(&hand), None);
}

#[test]
fn narrated_game_hides_computer_cards() {
    let options = GameOptions::default().with_hand_size(2).with_shuffle(false);
    let deck = Deck::from_cards([
        card(Rank::Three, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::Nine, Suit::Spades),
    ]);
    let mut game = Game::with_deck(options, ["Alice", "Computer"], deck, 0);
    let mut human = console("3\n5\n");
    let mut computer = Always(Rank::Nine);
    let mut narrator = ConsoleNarrator::new(Vec::new(), &game, 0);

    let result = game
        .play([&mut human, &mut computer], &mut narrator)
        .unwrap();
    assert_eq!(result.outcome, GameOutcome::Winner(0));

    let prompts = output_of(human);
    assert!(prompts.contains("\t[3H, 5D]\n"));
    assert!(prompts.contains("\t[5D]\n"));

    let narration = String::from_utf8(narrator.into_inner()).unwrap();
    for line in [
        "Dealing cards...",
        "\tAlice receives the 3 of Hearts.",
        "\tChecking for pairs...",
        "Alice has 0 pairs total.",
        "=== Alice's turn! ===",
        "Alice asks Computer if they have any 3s.",
        "Yes! Computer hands over the 3 of Clubs.",
        "Alice made a pair of 3s, and now has 1 total pairs!",
        "Go again!",
        "No 5s. Go fish!",
        "Alice drew the 5 of Spades from the deck.",
        "Computer draws a card from the deck.",
        "=== F I N A L  S C O R E ===",
        "Alice is the winner of this match!",
        "Alice had 2 pairs, while Computer had 1 pairs.",
    ] {
        assert!(narration.contains(line), "missing {line:?} in:\n{narration}");
    }
    assert!(!narration.contains("Computer receives"));
    assert!(!narration.contains("9 of Spades"));
}

#[test]
fn narrator_reports_draws_and_books() {
    let game = Game::new(
        GameOptions::default().with_mode(GameMode::Books),
        ["Alice", "Computer"],
        0,
    );
    let mut narrator = ConsoleNarrator::new(Vec::new(), &game, 0);

    narrator.narrate(&GameEvent::GoAgain {
        player: 0,
        group_formed: false,
    });
    narrator.narrate(&GameEvent::GameOver(GameResult {
        mode: GameMode::Books,
        scores: [6, 6],
        outcome: GameOutcome::Draw,
        turns: 40,
    }));

    let narration = String::from_utf8(narrator.into_inner()).unwrap();
    assert!(narration.contains("It's not enough for a book, but you may still go again!"));
    assert!(narration.contains("It's a draw!"));
    assert!(narration.contains("Alice had 6 books, while Computer had 6 books."));
}

#[test]
fn end_of_input_is_kept_as_the_error() {
    let hand: Hand = [card(Rank::Two, Suit::Hearts)].into_iter().collect();
    let mut console = console("");

    assert_eq!(console.choose_rank(&hand), None);
    assert_eq!(
        console.take_error().map(|err| err.kind()),
        Some(io::ErrorKind::UnexpectedEof)
    );
    assert!(console.take_error().is_none());
}

#[test]
fn failed_prompt_output_is_kept_as_the_error() {
    let hand: Hand = [card(Rank::Two, Suit::Hearts)].into_iter().collect();
    let mut console = Console::new(Cursor::new("2\n".as_bytes()), BrokenPipe);

    assert_eq!(console.choose_rank(&hand), None);
    assert_eq!(
        console.take_error().map(|err| err.kind()),
        Some(io::ErrorKind::BrokenPipe)
    );
}

#[test]
fn narrator_keeps_first_write_error() {
    let game = Game::new(GameOptions::default(), ["Alice", "Computer"], 0);
    let mut narrator = ConsoleNarrator::new(BrokenPipe, &game, 0);

    narrator.narrate(&GameEvent::TurnStarted { player: 0 });
    narrator.narrate(&GameEvent::DeckEmpty { player: 0 });

    assert_eq!(
        narrator.take_error().map(|err| err.kind()),
        Some(io::ErrorKind::BrokenPipe)
    );
}

#[test]
fn broken_output_still_lets_the_game_finish() {
    let mut game = Game::new(GameOptions::default(), ["Alice", "Computer"], 5);
    let mut narrator = ConsoleNarrator::new(BrokenPipe, &game, 0);
    let mut first = gofish::RandomStrategy::seeded(1);
    let mut second = gofish::RandomStrategy::seeded(2);

    let result = game.play([&mut first, &mut second], &mut narrator).unwrap();

    assert_eq!(result.scores[0] + result.scores[1], 26);
    assert!(narrator.take_error().is_some());
}
