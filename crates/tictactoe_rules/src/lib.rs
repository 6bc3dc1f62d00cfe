//! Tic-tac-toe rules for square boards from 3x3 to 5x5.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Types**: marks, cells and the flat row-major [`Board`]
//! - **Lines**: the rows, columns and diagonals that win the game
//! - **Rules**: pure win/tie detection over a board
//! - **Game**: move application, the post-move hook and the random
//!   computer opponent
//! - **Settings**: board size and game mode
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{BoardSize, Game, GameMode, Mark, Outcome};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut game = Game::with_rng(BoardSize::Three, GameMode::HumanVsHuman, StdRng::seed_from_u64(1));
//! for index in [0, 3, 1, 4, 2] {
//!     game.click(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod lines;
mod rules;
mod settings;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Mark};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Lines
pub use lines::{Line, LineKind, winning_lines};

// Crate-level exports - Rules
pub use rules::{Outcome, is_full, outcome, winner, winning_line};

// Crate-level exports - Game engine
pub use game::{COMPUTER_MARK, Game, GameEvent, MoveError};

// Crate-level exports - Settings
pub use settings::{BoardSize, BoardSizeError, GameMode};
