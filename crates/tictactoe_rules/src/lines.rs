//! Winning lines for an N×N board.

use crate::settings::BoardSize;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A set of cell indices that wins when uniformly marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Family and position of the line.
    pub kind: LineKind,
    /// Cell indices, N of them.
    pub cells: Vec<usize>,
}

impl Line {
    /// Checks if the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Enumerates the 2N + 2 winning lines for a board size.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal (`i * (N + 1)`), then the anti-diagonal (`(i + 1) * (N - 1)`,
/// i.e. row `i`, column `N - 1 - i`). Win detection takes the first
/// matching line in this order.
#[instrument]
pub fn winning_lines(size: BoardSize) -> Vec<Line> {
    let n = size.side();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push(Line {
            kind: LineKind::Row(row),
            cells: (0..n).map(|col| row * n + col).collect(),
        });
    }

    for col in 0..n {
        lines.push(Line {
            kind: LineKind::Column(col),
            cells: (0..n).map(|row| col + row * n).collect(),
        });
    }

    lines.push(Line {
        kind: LineKind::MainDiagonal,
        cells: (0..n).map(|i| i * (n + 1)).collect(),
    });

    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..n).map(|i| (i + 1) * (n - 1)).collect(),
    });

    lines
}
