//! "Say hi" greeting line.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use serde::{Deserialize, Serialize};

/// Props accepted by [`SayHi`].
///
/// Extra fields such as `age` are accepted but not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, derive_new::new)]
pub struct SayHiProps {
    /// Name to greet.
    name: String,
    /// Age, carried along but unused by the greeting.
    #[new(default)]
    age: Option<String>,
}

impl SayHiProps {
    /// Props with both a name and an age.
    pub fn with_age(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: Some(age.into()),
        }
    }
}

/// Greets one person by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayHi {
    name: String,
}

impl SayHi {
    /// Builds the greeting from props, consuming only the name.
    pub fn from_props(props: &SayHiProps) -> Self {
        Self {
            name: props.name().clone(),
        }
    }

    /// Builds the greeting from a bare name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Greeting text.
    pub fn text(&self) -> String {
        format!("Hi, {}!", self.name)
    }

    /// Renders the greeting on one line.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw("Hi, "),
            Span::styled(self.name.clone(), Style::default().fg(Color::Green)),
            Span::raw("!"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
