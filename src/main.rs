//! Play Go Fish against the computer in the terminal.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{Level, info};

use gofish::console::{Console, ConsoleNarrator};
use gofish::{Game, GameMode, GameOptions, PlayerId, RandomStrategy};

const HUMAN: PlayerId = 0;
const COMPUTER_NAME: &str = "Computer";

#[derive(Parser, Debug)]
#[command(name = "gofish")]
#[command(about = "Play Go Fish against the computer, by pairs or by books")]
#[command(version)]
struct Args {
    /// Your name (prompted for when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Rules to play by: pairs or books (prompted for when omitted)
    #[arg(long)]
    mode: Option<GameMode>,

    /// Seed for the shuffle and the computer's choices
    #[arg(long)]
    seed: Option<u64>,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: u8,

    /// Log engine activity to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.welcome()?;

    let name = match args.name {
        Some(name) => name,
        None => console.prompt_name().context("reading player name")?,
    };
    let mode = match args.mode {
        Some(mode) => mode,
        None => console.prompt_mode(&name).context("reading game mode")?,
    };
    console.announce_mode(mode)?;

    let seed = args.seed.unwrap_or_else(time_seed);
    info!(seed, %mode, hand_size = args.hand_size, "starting game");

    let options = GameOptions::default()
        .with_mode(mode)
        .with_hand_size(args.hand_size);
    let mut game = Game::new(options, [name.as_str(), COMPUTER_NAME], seed);
    let mut computer = RandomStrategy::seeded(seed.wrapping_add(1));
    let mut narrator = ConsoleNarrator::new(io::stdout(), &game, HUMAN);

    let played = game.play([&mut console, &mut computer], &mut narrator);
    if let Some(err) = narrator.take_error() {
        return Err(anyhow::Error::new(err).context("writing game narration"));
    }
    if let Some(err) = console.take_error() {
        return Err(anyhow::Error::new(err).context("reading your move"));
    }
    played.context("game ended before all cards were played")?;

    Ok(())
}
