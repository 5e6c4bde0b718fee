//! Game configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseModeError;

/// Rule variant, fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Ask for one card at a time and score pairs (2 of a kind).
    #[default]
    Pairs,
    /// Ask for every card of a rank and score books (4 of a kind).
    Books,
}

impl GameMode {
    /// Number of same-rank cards that make one scoring group.
    #[must_use]
    pub const fn group_size(self) -> usize {
        match self {
            Self::Pairs => 2,
            Self::Books => 4,
        }
    }

    /// Most cards an opponent can hand over for a single ask.
    #[must_use]
    pub const fn transfer_cap(self) -> usize {
        match self {
            Self::Pairs => 1,
            Self::Books => 3,
        }
    }

    /// Singular name of the scoring unit, e.g. `"pair"`.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Pairs => "pair",
            Self::Books => "book",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pairs => "Pairs",
            Self::Books => "Books",
        })
    }
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("pair") || token.eq_ignore_ascii_case("pairs") {
            Ok(Self::Pairs)
        } else if token.eq_ignore_ascii_case("book") || token.eq_ignore_ascii_case("books") {
            Ok(Self::Books)
        } else {
            Err(ParseModeError)
        }
    }
}

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::{GameMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_mode(GameMode::Books)
///     .with_hand_size(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Rule variant.
    pub mode: GameMode,
    /// Cards dealt to each player at the start.
    pub hand_size: u8,
    /// Whether the deck is shuffled before dealing.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::Pairs,
            hand_size: 7,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the rule variant.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_mode(GameMode::Books);
    /// assert_eq!(options.mode, GameMode::Books);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// Unshuffled games deal from the deck's existing order, which makes a
    /// stacked deck play out the same way every time.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
