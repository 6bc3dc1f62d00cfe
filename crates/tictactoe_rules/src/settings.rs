//! Game settings: board size and game mode.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Side length of the square board.
///
/// Only 3, 4 and 5 are playable. Conversions from raw integers go
/// through [`TryFrom<u8>`], so an out-of-range size never reaches the
/// game engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    /// 3x3 board.
    #[default]
    Three,
    /// 4x4 board.
    Four,
    /// 5x5 board.
    Five,
}

impl BoardSize {
    /// Returns the side length N.
    pub fn side(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Returns the number of cells, N².
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the next size, wrapping from 5 back to 3.
    #[instrument]
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Returns the previous size, wrapping from 3 to 5.
    #[instrument]
    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.side(), self.side())
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.side() as u8
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(BoardSizeError(other)),
        }
    }
}

/// Board size outside the supported 3..=5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Unsupported board size {}, expected 3, 4 or 5", _0)]
pub struct BoardSizeError(pub u8);

impl std::error::Error for BoardSizeError {}

/// Who controls the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[serde(rename = "human")]
    #[strum(serialize = "human")]
    HumanVsHuman,
    /// O is played by the computer.
    #[serde(rename = "computer")]
    #[strum(serialize = "computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
