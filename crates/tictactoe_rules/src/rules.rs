//! Win and tie detection.
//!
//! These are pure functions over a [`Board`]. The game engine never
//! stores a winner; it asks these functions after every mutation.

use crate::board::Board;
use crate::lines::{Line, winning_lines};
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and empty cells remain.
    #[default]
    InProgress,
    /// A line is uniformly marked.
    Won(Mark),
    /// Board is full with no winning line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game has a winner or is tied.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Returns the first uniformly marked line, in enumeration order.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn winning_line(board: &Board) -> Option<Line> {
    winning_lines(*board.size()).into_iter().find(|line| {
        let Some((&first, rest)) = line.cells.split_first() else {
            return false;
        };
        match board.get(first) {
            Some(Cell::Marked(mark)) => rest
                .iter()
                .all(|&i| board.get(i) == Some(Cell::Marked(mark))),
            _ => false,
        }
    })
}

/// Returns the winning mark, if any line is complete.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board)
        .and_then(|line| line.cells.first().copied())
        .and_then(|i| board.get(i))
        .and_then(Cell::mark)
}

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Evaluates the board: winner first, then tie, else in progress.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
