//! Terminal setup and the screen event loop.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// Input poll timeout; short enough to keep animations smooth.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs `screen` in the alternate screen until it quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub async fn run_screen<S: Screen>(mut screen: S) -> Result<()> {
    info!("Entering terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut screen).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Screen loop error");
    }
    info!("Left terminal UI");
    res
}

/// Draws, polls input and dispatches keys until the screen asks to quit.
#[instrument(skip_all)]
pub async fn run_loop<B, S>(terminal: &mut Terminal<B>, screen: &mut S) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: Screen,
{
    loop {
        screen.tick(Instant::now());
        terminal.draw(|f| screen.render(f))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if is_interrupt(&key) {
                info!("Interrupted");
                return Ok(());
            }

            if screen.handle_key(key) == ScreenTransition::Quit {
                info!("Screen quitting");
                return Ok(());
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}

/// Ctrl-C quits from any screen, raw mode swallows the signal.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_interrupt() {
        assert!(is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
