//! Line-based terminal front end.
//!
//! [`Console`] reads setup answers and the human's rank choices, and
//! [`ConsoleNarrator`] prints the game as it unfolds. Both are generic over
//! their reader and writer so they can be driven from memory.
//!
//! Neither can fail through the engine's [`Strategy`] and [`Narrator`]
//! interfaces, so each keeps the first I/O error it hits and hands it out
//! through `take_error`.

use std::io::{self, BufRead, Write};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::warn;

use crate::card::{Card, Rank};
use crate::event::{GameEvent, GroupSource, Narrator};
use crate::game::Game;
use crate::hand::Hand;
use crate::options::GameMode;
use crate::player::PlayerId;
use crate::result::{GameOutcome, GameResult};
use crate::strategy::Strategy;

/// Prompts the human player and reads their answers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// Consumes the console, returning its reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints `prompt` and reads one trimmed line.
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Greets the player.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Go Fish!")
    }

    /// Asks for the player's name until a non-empty one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or input ends.
    pub fn prompt_name(&mut self) -> io::Result<String> {
        loop {
            let name = self.prompt("Please enter your name: ")?;
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    /// Explains both rule variants and asks which to play until the answer
    /// names one.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or input ends.
    pub fn prompt_mode(&mut self, name: &str) -> io::Result<GameMode> {
        writeln!(
            self.output,
            "Welcome, {name}! This game has two possible styles: Pairs and Books."
        )?;
        writeln!(
            self.output,
            "The goal of Pairs is to collect pairs (2 of a kind); \
             the goal of Books is to collect books (4 of a kind)."
        )?;
        loop {
            let answer =
                self.prompt("Which rules would you like to play by? (Pairs or Books): ")?;
            match answer.parse() {
                Ok(mode) => return Ok(mode),
                Err(_) => writeln!(self.output, "Not a valid choice! Try 'pairs' or 'books'")?,
            }
        }
    }

    /// Confirms the chosen rules.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn announce_mode(&mut self, mode: GameMode) -> io::Result<()> {
        writeln!(self.output, "Excellent! Playing {mode}...")
    }

    /// Returns the I/O error that stopped the last rank prompt, if any.
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_rank(&mut self, hand: &Hand) -> io::Result<Rank> {
        writeln!(self.output, "Here's your hand:")?;
        writeln!(self.output, "\t{hand}")?;
        let mut answer = self.prompt(
            "What value would you like to ask your opponent for? Choose 2-10, J, Q, K, or A: ",
        )?;
        loop {
            match answer.parse() {
                Ok(rank) => return Ok(rank),
                Err(_) => {
                    answer = self.prompt("Not a valid choice! Try 2-10, J, Q, K, or A: ")?;
                }
            }
        }
    }
}

/// Asks the human at the keyboard. Ends the game when input is closed or
/// the terminal fails.
impl<R: BufRead, W: Write> Strategy for Console<R, W> {
    fn choose_rank(&mut self, hand: &Hand) -> Option<Rank> {
        match self.read_rank(hand) {
            Ok(rank) => Some(rank),
            Err(err) => {
                warn!(error = %err, "rank prompt failed");
                if self.error.is_none() {
                    self.error = Some(err);
                }
                None
            }
        }
    }
}

/// Prints game events, hiding the automated player's cards.
#[derive(Debug)]
pub struct ConsoleNarrator<W> {
    output: W,
    names: [String; 2],
    mode: GameMode,
    human: PlayerId,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleNarrator<W> {
    /// Creates a narrator for `game` that reveals the cards of seat `human`.
    pub fn new(output: W, game: &Game, human: PlayerId) -> Self {
        let [first, second] = game.players();
        Self {
            output,
            names: [first.name().to_string(), second.name().to_string()],
            mode: game.options().mode,
            human,
            error: None,
        }
    }

    /// Consumes the narrator, returning its writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    /// Returns the first write error, if any. Narration stops after it.
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn name(&self, player: PlayerId) -> &str {
        self.names
            .get(usize::from(player))
            .map_or("?", String::as_str)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let unit = self.mode.unit();
        match event {
            GameEvent::Dealing { .. } => writeln!(self.output, "Dealing cards...")?,
            GameEvent::Dealt { player, card } => {
                if *player == self.human {
                    let name = self.name(*player).to_string();
                    writeln!(self.output, "\t{name} receives the {card}.")?;
                }
            }
            GameEvent::ScanStarted { .. } => {
                writeln!(self.output, "\n\tChecking for {unit}s...")?;
            }
            GameEvent::ScanFinished { player, score } => {
                let name = self.name(*player).to_string();
                writeln!(self.output, "{name} has {score} {unit}s total.")?;
            }
            GameEvent::GroupFormed {
                player,
                rank,
                cards,
                source,
                score,
            } => {
                let name = self.name(*player).to_string();
                match source {
                    GroupSource::Deal => {
                        writeln!(self.output, "{name} found a {unit}:")?;
                        writeln!(self.output, "\t{}", list_cards(cards))?;
                    }
                    GroupSource::Ask | GroupSource::Draw => writeln!(
                        self.output,
                        "{name} made a {unit} of {}s, and now has {score} total {unit}s!",
                        rank.name()
                    )?,
                }
            }
            GameEvent::TurnStarted { player } => {
                let name = self.name(*player).to_string();
                writeln!(self.output, "\n=== {name}'s turn! ===")?;
            }
            GameEvent::EmptyHand { .. } => {
                writeln!(self.output, "... but their hand is empty! Go fish!")?;
            }
            GameEvent::RankNotInHand { .. } => {
                writeln!(self.output, "You must pick a value already in your hand!")?;
            }
            GameEvent::Asked {
                player,
                opponent,
                rank,
            } => {
                let name = self.name(*player).to_string();
                let other = self.name(*opponent).to_string();
                writeln!(
                    self.output,
                    "{name} asks {other} if they have any {}s.",
                    rank.name()
                )?;
            }
            GameEvent::Transferred { from, cards, .. } => {
                let giver = self.name(*from).to_string();
                for card in cards {
                    writeln!(self.output, "Yes! {giver} hands over the {card}.")?;
                }
            }
            GameEvent::GoAgain { group_formed, .. } => {
                if *group_formed {
                    writeln!(self.output, "Go again!")?;
                } else {
                    writeln!(
                        self.output,
                        "It's not enough for a {unit}, but you may still go again!"
                    )?;
                }
            }
            GameEvent::Miss { rank, .. } => {
                writeln!(self.output, "No {}s. Go fish!", rank.name())?;
            }
            GameEvent::Drew { player, card } => {
                let name = self.name(*player).to_string();
                if *player == self.human {
                    writeln!(self.output, "{name} drew the {card} from the deck.")?;
                } else {
                    writeln!(self.output, "{name} draws a card from the deck.")?;
                }
            }
            GameEvent::DeckEmpty { .. } => {
                writeln!(self.output, "... but the deck is empty!")?;
            }
            GameEvent::GameOver(result) => self.write_summary(result)?,
        }
        self.output.flush()
    }

    fn write_summary(&mut self, result: &GameResult) -> io::Result<()> {
        let unit = self.mode.unit();
        writeln!(
            self.output,
            "\nSince there are no more cards in play, the game is over!"
        )?;
        writeln!(self.output, "\n=== F I N A L  S C O R E ===")?;
        match result.outcome {
            GameOutcome::Winner(player) => {
                let name = self.name(player).to_string();
                writeln!(self.output, "\n{name} is the winner of this match!")?;
            }
            GameOutcome::Draw => writeln!(self.output, "\nIt's a draw!")?,
        }
        let [first, second] = result.scores;
        let (first_name, second_name) = (self.name(0).to_string(), self.name(1).to_string());
        writeln!(
            self.output,
            "{first_name} had {first} {unit}s, while {second_name} had {second} {unit}s."
        )
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            warn!(error = %err, "narration output failed");
            self.error = Some(err);
        }
    }
}

fn list_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}
