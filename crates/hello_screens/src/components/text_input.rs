//! Single-line text input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Editable line of text with a cursor.
///
/// The cursor is a char index into `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Inserts `c` at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the char before the cursor. Returns true if something was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Deletes the char under the cursor. Returns true if something was removed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Applies an editing key. Returns true when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.value.chars().count();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = len;
                false
            }
            _ => false,
        }
    }

    /// Display column of the cursor, saturating at `u16::MAX`.
    fn cursor_column(&self) -> u16 {
        let before = &self.value[..self.byte_offset(self.cursor)];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    /// Horizontal scroll that keeps the cursor inside `inner_width` columns.
    fn scroll_offset(&self, inner_width: u16) -> u16 {
        self.cursor_column().saturating_sub(inner_width.saturating_sub(1))
    }

    /// Renders the input in a bordered box, placing the terminal cursor when focused.
    ///
    /// Text wider than the box scrolls sideways so the cursor stays visible.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border = if focused { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        let offset = self.scroll_offset(inner.width);
        let input = Paragraph::new(self.value.as_str())
            .block(block)
            .scroll((0, offset));
        frame.render_widget(input, area);

        if focused && inner.width > 0 && inner.height > 0 {
            let column = self.cursor_column().saturating_sub(offset);
            let x = inner
                .x
                .saturating_add(column)
                .min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
