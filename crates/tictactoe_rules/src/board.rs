//! Square board stored as a flat row-major sequence.

use crate::settings::BoardSize;
use crate::types::{Cell, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N×N board, cell `(row, col)` lives at index `row * N + col`.
///
/// The cell vector always holds exactly `size.cell_count()` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Board {
    /// Side length of the board.
    size: BoardSize,
    /// Cells in row-major order.
    #[getter(skip)]
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the side length N.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Converts a row and column into a cell index.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.side();
        (row < n && col < n).then_some(row * n + col)
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns the indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Returns the mark that moves next.
    ///
    /// X moves first, so X is to move whenever both marks have been
    /// placed equally often.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) <= self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Writes a cell. Callers validate the index first.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Formats the board as plain text, empty cells shown as `.`.
    pub fn display(&self) -> String {
        let n = self.side();
        self.cells
            .chunks(n)
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Cell::Empty => ".".to_string(),
                        Cell::Marked(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_board_is_empty_for_every_size() {
        for size in BoardSize::iter() {
            let board = Board::new(size);
            assert_eq!(board.cells().len(), size.cell_count());
            assert!(board.cells().iter().all(|c| c.is_empty()));
            assert_eq!(board.to_move(), Mark::X);
        }
    }

    #[test]
    fn test_index_is_row_major() {
        let board = Board::new(BoardSize::Four);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(1, 2), Some(6));
        assert_eq!(board.index(3, 3), Some(15));
        assert_eq!(board.index(4, 0), None);
    }

    #[test]
    fn test_to_move_follows_counts() {
        let mut board = Board::new(BoardSize::Three);
        board.set(4, Cell::Marked(Mark::X));
        assert_eq!(board.to_move(), Mark::O);
        board.set(0, Cell::Marked(Mark::O));
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut board = Board::new(BoardSize::Three);
        board.set(9, Cell::Marked(Mark::X));
        assert_eq!(board, Board::new(BoardSize::Three));
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Marked(Mark::X));
        board.set(4, Cell::Marked(Mark::O));
        assert_eq!(board.display(), "X . .\n. O .\n. . .");
    }
}
