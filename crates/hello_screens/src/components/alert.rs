//! Modal alert dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// A message shown over the screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    message: String,
}

impl Alert {
    /// Creates an alert with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Alert text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the dialog centered over `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered(area, 30, 6);
        frame.render_widget(Clear, popup);
        let body = Paragraph::new(vec![
            Line::from(self.message.clone()),
            Line::from(""),
            Line::from("[ OK ]").style(Style::default().add_modifier(Modifier::REVERSED)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(body, popup);
    }
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
