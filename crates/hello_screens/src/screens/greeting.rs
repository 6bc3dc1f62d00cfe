//! Greeting screen: hello-world heading, greetings, clock, input and alert button.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::components::{Alert, Clock, SayHi, SayHiProps, TextInput};
use crate::screen::{Screen, ScreenTransition};

/// Message shown by the alert button.
pub const ALERT_MESSAGE: &str = "hi";

/// Widget holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingFocus {
    /// The text input.
    Input,
    /// The alert button.
    Button,
}

impl GreetingFocus {
    fn toggle(self) -> Self {
        match self {
            Self::Input => Self::Button,
            Self::Button => Self::Input,
        }
    }
}

/// Shared props spread into the first greeting; only `name` is shown.
fn shared_props() -> SayHiProps {
    SayHiProps::with_age("Hello", "asdasd")
}

/// State for the greeting screen.
#[derive(Debug)]
pub struct GreetingScreen {
    greetings: Vec<SayHi>,
    clock: Clock,
    input: TextInput,
    focus: GreetingFocus,
    alert: Option<Alert>,
}

impl Default for GreetingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingScreen {
    /// Creates the greeting screen with its three greetings.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GreetingScreen");
        Self {
            greetings: vec![
                SayHi::from_props(&shared_props()),
                SayHi::named("Tuasddka"),
                SayHi::named("Huska"),
            ],
            clock: Clock::local(),
            input: TextInput::new(),
            focus: GreetingFocus::Input,
            alert: None,
        }
    }

    /// Greetings in display order.
    pub fn greetings(&self) -> &[SayHi] {
        &self.greetings
    }

    /// Current text input contents.
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    /// Focused widget.
    pub fn focus(&self) -> GreetingFocus {
        self.focus
    }

    /// Open alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[instrument(skip(self))]
    fn press_button(&mut self) {
        info!(message = ALERT_MESSAGE, "Alert raised");
        self.alert = Some(Alert::new(ALERT_MESSAGE));
    }

    fn handle_alert_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            info!("Alert dismissed");
            self.alert = None;
        }
        ScreenTransition::Stay
    }
}

impl Screen for GreetingScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                          // Heading
                Constraint::Length(self.greetings.len() as u16), // Greetings
                Constraint::Length(1),                          // Clock
                Constraint::Length(1),                          // Spacer
                Constraint::Length(3),                          // Input
                Constraint::Length(3),                          // Button
                Constraint::Min(0),
                Constraint::Length(1),                          // Help
            ])
            .split(area);

        let heading = Paragraph::new("hello world!")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(heading, chunks[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); self.greetings.len()])
            .split(chunks[1]);
        for (greeting, row) in self.greetings.iter().zip(rows.iter()) {
            greeting.render(frame, *row);
        }

        self.clock.render(frame, chunks[2]);

        let input_focused = self.focus == GreetingFocus::Input && self.alert.is_none();
        self.input.render(frame, chunks[4], "Type something", input_focused);

        let button_style = if self.focus == GreetingFocus::Button {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let button = Paragraph::new("[ Say hi ]")
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, chunks[5]);

        let help = Paragraph::new("Tab: Switch focus | Enter: Press button | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[7]);

        if let Some(alert) = &self.alert {
            alert.render(frame, area);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if self.alert.is_some() {
            return self.handle_alert_key(key);
        }

        match key.code {
            KeyCode::Esc => {
                info!("Leaving greeting screen");
                ScreenTransition::Quit
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
                ScreenTransition::Stay
            }
            _ => match self.focus {
                GreetingFocus::Input => {
                    if self.input.handle_key(key) {
                        info!(value = %self.input.value(), "Input changed");
                    }
                    ScreenTransition::Stay
                }
                GreetingFocus::Button => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        self.press_button();
                        ScreenTransition::Stay
                    }
                    KeyCode::Char('q') => ScreenTransition::Quit,
                    _ => ScreenTransition::Stay,
                },
            },
        }
    }

    fn tick(&mut self, _now: Instant) {
        self.clock.update(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_greetings() {
        let screen = GreetingScreen::new();
        let texts: Vec<String> = screen.greetings().iter().map(|g| g.text()).collect();
        assert_eq!(texts, vec!["Hi, Hello!", "Hi, Tuasddka!", "Hi, Huska!"]);
    }

    #[test]
    fn test_typing_updates_input() {
        let mut screen = GreetingScreen::new();
        for c in "abc".chars() {
            assert_eq!(screen.handle_key(key(KeyCode::Char(c))), ScreenTransition::Stay);
        }
        assert_eq!(screen.input_value(), "abc");
    }

    #[test]
    fn test_button_raises_and_dismisses_alert() {
        let mut screen = GreetingScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), GreetingFocus::Button);

        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.alert().map(|a| a.message()), Some(ALERT_MESSAGE));

        // Keys other than dismiss are swallowed by the alert.
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Stay);
        assert!(screen.alert().is_some());

        // Esc closes the alert rather than quitting.
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::Stay);
        assert!(screen.alert().is_none());
    }

    #[test]
    fn test_q_types_into_input_but_quits_from_button() {
        let mut screen = GreetingScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Stay);
        assert_eq!(screen.input_value(), "q");
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
    }

    #[test]
    fn test_esc_quits() {
        let mut screen = GreetingScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::Quit);
    }
}
