//! Screen trait and transition type for the screen runner.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Keep running the current screen.
    Stay,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// The runner calls [`Screen::tick`] once per loop iteration, then
/// [`Screen::render`], then [`Screen::handle_key`] for any key press.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Advances time-driven state such as clocks and animations.
    fn tick(&mut self, _now: Instant) {}
}
