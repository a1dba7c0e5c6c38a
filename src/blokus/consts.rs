use serde::{Deserialize, Serialize};

use crate::utils::prelude::*;

/// Backing storage for every board is sized for the largest mode.
pub const MAX_BOARD_SIZE: usize = 20;
pub const STANDARD_BOARD_SIZE: usize = 20;
pub const DUO_BOARD_SIZE: usize = 14;

pub const NUM_PLAYERS: usize = 4;
pub const NUM_SHAPES: usize = 21;
pub const TOTAL_SQUARES: usize = 89;

pub const ALL_PLACED_BONUS: i32 = 15;
pub const MONOMINO_LAST_BONUS: i32 = 5;

/// A seat at the table. Ids run 0..=3 and double as the index into per-player storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Constructs a player id, if it names one of the four seats.
    pub fn new(id: u8) -> Option<PlayerId> {
        ((id as usize) < NUM_PLAYERS).then_some(PlayerId(id))
    }

    /// All four seats in table order.
    pub fn all() -> [PlayerId; NUM_PLAYERS] {
        [PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]
    }

    /// Index into per-player arrays.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The value this player writes into a grid snapshot (0 is reserved for empty).
    pub fn grid_value(&self) -> u8 {
        self.0 + 1
    }

    /// Notates the player as its bare id.
    pub fn notate(&self) -> String {
        self.0.to_string()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = Error;
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        PlayerId::new(value).ok_or_else(|| anyhow!("expected a player id of 0-3, received {value}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(value: PlayerId) -> Self {
        value.0
    }
}

impl std::str::FromStr for PlayerId {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let raw = s.parse::<u8>().with_context(|| format!("invalid notation {s} for player"))?;
        PlayerId::try_from(raw)
    }
}

/// A player colour; purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

impl Color {
    /// The conventional colour for a seat.
    pub fn default_for(id: PlayerId) -> Color {
        match id.index() {
            0 => Color::Blue,
            1 => Color::Yellow,
            2 => Color::Red,
            _ => Color::Green,
        }
    }
}

/// The board variants the core knows how to set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// 20x20, up to four players starting in the board corners.
    Standard,
    /// 14x14, two players starting on the inner points (4, 4) and (9, 9).
    Duo,
}

impl GameMode {
    pub fn board_size(&self) -> usize {
        match self {
            GameMode::Standard => STANDARD_BOARD_SIZE,
            GameMode::Duo      => DUO_BOARD_SIZE,
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "standard" | "classic" => Ok(GameMode::Standard),
            "duo"                  => Ok(GameMode::Duo),
            _                      => Err(anyhow!("invalid notation {s} for game mode")),
        }
    }
}
