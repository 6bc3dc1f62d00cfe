//! Tic-tac-toe screen: board, selectors and status line.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use strum::IntoEnumIterator;
use tictactoe_rules::{BoardSize, Cell, Game, GameEvent, GameMode, Mark, winning_line};
use tracing::{debug, info, instrument};

use crate::animation::{GLYPH_HEIGHT, GLYPH_WIDTH, MarkAnimations};
use crate::config::{AnimationConfig, TicTacToeConfig};
use crate::screen::{Screen, ScreenTransition};

/// Columns per cell: the glyph plus one space on each side.
const CELL_WIDTH: usize = GLYPH_WIDTH + 2;

/// Control holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Focus {
    /// The board; arrows move the cursor.
    Board,
    /// The board-size selector.
    SizeSelector,
    /// The game-mode selector.
    ModeSelector,
}

impl Focus {
    fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// State for the tic-tac-toe screen.
#[derive(Debug)]
pub struct TicTacToeScreen {
    game: Game,
    cursor: usize,
    focus: Focus,
    animations: MarkAnimations,
    now: Instant,
}

impl TicTacToeScreen {
    /// Creates the screen from its starting settings.
    #[instrument(skip(animation))]
    pub fn new(config: &TicTacToeConfig, animation: AnimationConfig) -> Self {
        let size = *config.board_size();
        let mode = *config.game_mode();
        let game = match config.seed() {
            Some(seed) => Game::seeded(size, mode, *seed),
            None => Game::new(size, mode),
        };
        Self {
            game,
            cursor: center(size),
            focus: Focus::Board,
            animations: MarkAnimations::new(animation),
            now: Instant::now(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell index under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Status line for the current outcome.
    pub fn status(&self) -> String {
        let outcome = self.game.outcome();
        if let Some(mark) = outcome.winner() {
            format!("Player {} wins! Press 'r' to restart.", mark)
        } else if outcome.is_finished() {
            "It's a tie! Press 'r' to restart.".to_string()
        } else {
            format!("Player {}'s turn", self.game.to_move())
        }
    }

    /// Clicks the cell under the cursor.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    fn click(&mut self) {
        let events = self.game.click(self.cursor);
        self.apply_events(events, Instant::now());
    }

    /// Starts animations for new marks at `at`; a reply starts after the mark before it.
    fn apply_events(&mut self, events: Vec<GameEvent>, mut at: Instant) {
        for event in events {
            match event {
                GameEvent::MarkPlaced { index, mark } => {
                    self.animations.start(index, at);
                    at += self.animations.duration(mark);
                }
                GameEvent::Finished(outcome) => {
                    info!(%outcome, "Game over");
                }
                GameEvent::BoardReset { size } => {
                    self.animations.clear();
                    self.cursor = center(size);
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn set_board_size(&mut self, size: BoardSize) {
        let event = self.game.set_board_size(size);
        self.apply_events(vec![event], Instant::now());
    }

    #[instrument(skip(self))]
    fn set_mode(&mut self, mode: GameMode) {
        self.game.set_mode(mode);
    }

    #[instrument(skip(self))]
    fn restart(&mut self) {
        let event = self.game.restart();
        self.apply_events(vec![event], Instant::now());
    }

    /// Moves the cursor by one cell, stopping at the edges.
    fn move_cursor(&mut self, key: KeyCode) {
        let board = self.game.board();
        let n = board.side();
        let (row, col) = (self.cursor / n, self.cursor % n);
        let (row, col) = match key {
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(n - 1), col),
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(n - 1)),
            _ => (row, col),
        };
        self.cursor = board.index(row, col).unwrap_or(self.cursor);
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Board => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.move_cursor(key.code)
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.click(),
                _ => {}
            },
            Focus::SizeSelector => match key.code {
                KeyCode::Left => self.set_board_size(self.game.size().previous()),
                KeyCode::Right | KeyCode::Enter => self.set_board_size(self.game.size().next()),
                _ => {}
            },
            Focus::ModeSelector => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right | KeyCode::Enter) {
                    self.set_mode(self.game.mode().toggle());
                }
            }
        }
    }

    /// Text lines for the board, glyphs animated as of `self.now`.
    pub fn board_lines(&self) -> Vec<Line<'static>> {
        let board = self.game.board();
        let n = board.side();
        let highlight = winning_line(board);
        let mut lines = Vec::with_capacity(n * (GLYPH_HEIGHT + 1));

        for row in 0..n {
            if row > 0 {
                let sep = vec!["─".repeat(CELL_WIDTH); n].join("┼");
                lines.push(Line::styled(sep, Style::default().fg(Color::DarkGray)));
            }
            let glyphs: Vec<([String; GLYPH_HEIGHT], Style)> = (0..n)
                .filter_map(|col| board.index(row, col))
                .map(|index| {
                    let (glyph, mut style) = match board.get(index) {
                        Some(Cell::Marked(mark)) => (
                            self.animations.glyph(index, mark, self.now),
                            mark_style(mark),
                        ),
                        _ => (
                            std::array::from_fn(|_| " ".repeat(GLYPH_WIDTH)),
                            Style::default(),
                        ),
                    };
                    if highlight.as_ref().is_some_and(|l| l.contains(index)) {
                        style = style.bg(Color::Green).fg(Color::Black);
                    }
                    if index == self.cursor && self.focus == Focus::Board {
                        style = style.bg(Color::White).fg(Color::Black);
                    }
                    (glyph, style)
                })
                .collect();

            for glyph_row in 0..GLYPH_HEIGHT {
                let mut spans = Vec::with_capacity(2 * n);
                for (col, (glyph, style)) in glyphs.iter().enumerate() {
                    if col > 0 {
                        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                    }
                    spans.push(Span::styled(format!(" {} ", glyph[glyph_row]), *style));
                }
                lines.push(Line::from(spans));
            }
        }
        lines
    }

    fn selector_line(&self) -> Line<'static> {
        let style_for = |focus: Focus| {
            if self.focus == focus {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Yellow)
            }
        };
        Line::from(vec![
            Span::raw("Board size: "),
            Span::styled(format!("< {} >", self.game.size()), style_for(Focus::SizeSelector)),
            Span::raw("    Mode: "),
            Span::styled(format!("< {} >", self.game.mode()), style_for(Focus::ModeSelector)),
        ])
    }
}

impl Screen for TicTacToeScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Selectors
                Constraint::Min(11),   // Board
                Constraint::Length(3), // Status
                Constraint::Length(1), // Help
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let selectors = Paragraph::new(self.selector_line())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Settings"));
        frame.render_widget(selectors, chunks[1]);

        let n = self.game.board().side() as u16;
        let width = n * CELL_WIDTH as u16 + (n - 1);
        let height = n * GLYPH_HEIGHT as u16 + (n - 1);
        let board_area = center_rect(chunks[2], width, height);
        frame.render_widget(Paragraph::new(self.board_lines()), board_area);

        let status = Paragraph::new(self.status())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);

        let help = Paragraph::new(
            "Arrows: Move | Enter: Place | s: Size | m: Mode | Tab: Focus | r: Restart | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Leaving tic-tac-toe screen");
                return ScreenTransition::Quit;
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Char('s') => self.set_board_size(self.game.size().next()),
            KeyCode::Char('m') => self.set_mode(self.game.mode().toggle()),
            KeyCode::Char('r') => self.restart(),
            _ => self.handle_focused_key(key),
        }
        debug!(cursor = self.cursor, focus = ?self.focus, "Handled key");
        ScreenTransition::Stay
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
    }
}

/// Index of the middle cell, or just above-left of it on even boards.
fn center(size: BoardSize) -> usize {
    let n = size.side();
    let mid = (n - 1) / 2;
    mid * n + mid
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
