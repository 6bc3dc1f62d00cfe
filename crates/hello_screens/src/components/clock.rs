//! Live clock display.

use chrono::{DateTime, Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

/// Shows the time of its last update.
#[derive(Debug, Clone)]
pub struct Clock<Tz: TimeZone = Local> {
    now: DateTime<Tz>,
}

impl Clock<Local> {
    /// Creates a clock showing the current local time.
    pub fn local() -> Self {
        Self { now: Local::now() }
    }
}

impl<Tz: TimeZone> Clock<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    /// Creates a clock showing `now`.
    pub fn at(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// Moves the clock to `now`.
    pub fn update(&mut self, now: DateTime<Tz>) {
        self.now = now;
    }

    /// Current reading as `HH:MM:SS`.
    pub fn text(&self) -> String {
        self.now.format("%H:%M:%S").to_string()
    }

    /// Renders the reading.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text = format!("The time is {}", self.text());
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Magenta)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_formats_time() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let mut clock = Clock::at(t);
        assert_eq!(clock.text(), "09:05:07");
        clock.update(Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap());
        assert_eq!(clock.text(), "23:59:00");
    }
}
