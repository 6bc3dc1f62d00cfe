//! Game engine: move application, post-move hook and computer opponent.
//!
//! Every successful placement runs [`Game::after_mutation`] inline. The
//! hook evaluates the board, reports the outcome and, in
//! human-vs-computer mode, plays the computer's reply before control
//! returns to the caller.

use crate::board::Board;
use crate::rules::{self, Outcome};
use crate::settings::{BoardSize, GameMode};
use crate::types::{Cell, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Mark played by the computer in [`GameMode::HumanVsComputer`].
pub const COMPUTER_MARK: Mark = Mark::O;

/// Something that happened to the game, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was written into a cell.
    MarkPlaced {
        /// Cell index.
        index: usize,
        /// Mark written.
        mark: Mark,
    },
    /// The last placement ended the game.
    Finished(Outcome),
    /// Board was cleared, possibly at a new size.
    BoardReset {
        /// Size of the fresh board.
        size: BoardSize,
    },
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game already has a winner or is tied.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// A game session: board, mode and the computer's randomness source.
///
/// Current player and outcome are derived from the board on demand, so
/// they can never disagree with it.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    mode: GameMode,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game seeded from the operating system.
    #[instrument]
    pub fn new(size: BoardSize, mode: GameMode) -> Self {
        Self::with_rng(size, mode, StdRng::from_os_rng())
    }

    /// Creates a game with a fixed seed for reproducible computer moves.
    #[instrument]
    pub fn seeded(size: BoardSize, mode: GameMode, seed: u64) -> Self {
        Self::with_rng(size, mode, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a game drawing computer moves from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(size: BoardSize, mode: GameMode, rng: R) -> Self {
        info!(%size, %mode, "Creating game");
        Self {
            board: Board::new(size),
            mode,
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        *self.board.size()
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Places the current mark at `index`, ignoring disallowed moves.
    ///
    /// This is the click handler: an occupied cell, an off-board index or
    /// a finished game leave everything untouched and yield no events.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn click(&mut self, index: usize) -> Vec<GameEvent> {
        match self.try_place(index) {
            Ok(events) => events,
            Err(e) => {
                debug!(index, reason = %e, "Ignoring click");
                Vec::new()
            }
        }
    }

    /// Places the current mark at `index`.
    ///
    /// Returns every event the placement caused, including the computer's
    /// reply when one was played.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is not allowed; the game is
    /// unchanged in that case.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: usize) -> Result<Vec<GameEvent>, MoveError> {
        let mut events = Vec::new();
        self.apply_move(index, &mut events)?;
        Ok(events)
    }

    /// Validates and applies a single placement, then runs the hook.
    fn apply_move(&mut self, index: usize, events: &mut Vec<GameEvent>) -> Result<(), MoveError> {
        if self.outcome().is_finished() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(Cell::Marked(_)) => return Err(MoveError::CellOccupied(index)),
            Some(Cell::Empty) => {}
        }

        let mark = self.board.to_move();
        self.board.set(index, Cell::Marked(mark));
        debug!(index, %mark, "Mark placed");
        events.push(GameEvent::MarkPlaced { index, mark });

        self.after_mutation(events);
        Ok(())
    }

    /// Post-move hook: report a finished game or hand the turn over.
    fn after_mutation(&mut self, events: &mut Vec<GameEvent>) {
        let outcome = self.outcome();
        if outcome.is_finished() {
            info!(%outcome, "Game finished");
            events.push(GameEvent::Finished(outcome));
            return;
        }

        if self.mode == GameMode::HumanVsComputer && self.board.to_move() == COMPUTER_MARK {
            self.computer_move(events);
        }
    }

    /// Plays a uniformly random empty cell for the computer.
    fn computer_move(&mut self, events: &mut Vec<GameEvent>) {
        let empty = self.board.empty_cells();
        let Some(&index) = empty.choose(&mut self.rng) else {
            debug!("No empty cells for computer move");
            return;
        };
        debug!(index, candidates = empty.len(), "Computer chose cell");
        if let Err(e) = self.apply_move(index, events) {
            debug!(index, reason = %e, "Computer move refused");
        }
    }

    /// Switches to a new board size, clearing the board.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: BoardSize) -> GameEvent {
        info!(%size, "Board size changed");
        self.board = Board::new(size);
        GameEvent::BoardReset { size }
    }

    /// Switches game mode. Takes effect at the next turn change.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(%mode, "Game mode changed");
        self.mode = mode;
    }

    /// Clears the board, keeping size and mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> GameEvent {
        let size = self.size();
        info!(%size, "Restarting game");
        self.board = Board::new(size);
        GameEvent::BoardReset { size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: BoardSize, mode: GameMode) -> Game {
        Game::seeded(size, mode, 7)
    }

    #[test]
    fn test_click_places_and_flips_turn() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        let events = g.click(4);
        assert_eq!(events, vec![GameEvent::MarkPlaced { index: 4, mark: Mark::X }]);
        assert_eq!(g.board().get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(g.to_move(), Mark::O);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        g.click(4);
        let before = g.board().clone();
        assert!(g.click(4).is_empty());
        assert_eq!(g.board(), &before);
        assert_eq!(g.to_move(), Mark::O);
        assert_eq!(g.try_place(4), Err(MoveError::CellOccupied(4)));
    }

    #[test]
    fn test_off_board_is_ignored() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        assert!(g.click(9).is_empty());
        assert_eq!(g.try_place(42), Err(MoveError::OutOfBounds(42)));
        assert_eq!(g.to_move(), Mark::X);
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        for i in [0, 3, 1, 4] {
            g.click(i);
        }
        let events = g.click(2);
        assert_eq!(
            events,
            vec![
                GameEvent::MarkPlaced { index: 2, mark: Mark::X },
                GameEvent::Finished(Outcome::Won(Mark::X)),
            ]
        );
        let before = g.board().clone();
        assert!(g.click(8).is_empty());
        assert_eq!(g.board(), &before);
        assert_eq!(g.try_place(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_replies_once() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsComputer);
        let events = g.click(0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], GameEvent::MarkPlaced { index: 0, mark: Mark::X });
        match events[1] {
            GameEvent::MarkPlaced { index, mark } => {
                assert_eq!(mark, COMPUTER_MARK);
                assert_ne!(index, 0);
            }
            other => panic!("expected computer move, got {other:?}"),
        }
        assert_eq!(g.board().count(Mark::O), 1);
        assert_eq!(g.to_move(), Mark::X);
    }

    #[test]
    fn test_mode_change_does_not_move() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        g.click(0);
        g.set_mode(GameMode::HumanVsComputer);
        assert_eq!(g.board().count(Mark::O), 0);
        assert_eq!(g.to_move(), Mark::O);

        // O is still placed by hand; the computer takes over from the next O turn.
        let events = g.click(1);
        assert_eq!(events, vec![GameEvent::MarkPlaced { index: 1, mark: Mark::O }]);
        let events = g.click(2);
        assert_eq!(events.len(), 2);
        assert_eq!(g.board().count(Mark::O), 2);
    }

    #[test]
    fn test_resize_resets_and_clears_winner() {
        let mut g = game(BoardSize::Three, GameMode::HumanVsHuman);
        for i in [0, 3, 1, 4, 2] {
            g.click(i);
        }
        assert_eq!(g.outcome(), Outcome::Won(Mark::X));

        let event = g.set_board_size(BoardSize::Five);
        assert_eq!(event, GameEvent::BoardReset { size: BoardSize::Five });
        assert_eq!(g.board().cells().len(), 25);
        assert!(g.board().cells().iter().all(|c| c.is_empty()));
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert_eq!(g.to_move(), Mark::X);
    }

    #[test]
    fn test_restart_keeps_size_and_mode() {
        let mut g = game(BoardSize::Four, GameMode::HumanVsComputer);
        g.click(5);
        g.restart();
        assert_eq!(g.size(), BoardSize::Four);
        assert_eq!(g.mode(), GameMode::HumanVsComputer);
        assert!(g.board().empty_cells().len() == 16);
    }
}
