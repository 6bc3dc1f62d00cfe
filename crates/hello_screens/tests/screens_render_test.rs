//! Rendering tests for both screens against an in-memory terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hello_screens::{AnimationConfig, AppConfig, GreetingScreen, Screen, TicTacToeScreen};
use ratatui::{Terminal, backend::TestBackend};
use std::time::{Duration, Instant};
use tictactoe_rules::{BoardSize, GameMode, Mark};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render<S: Screen>(screen: &S) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| screen.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_greeting_screen_renders_everything() {
    let mut screen = GreetingScreen::new();
    screen.tick(Instant::now());
    let text = render(&screen);
    assert!(text.contains("hello world!"));
    assert!(text.contains("Hi, Hello!"));
    assert!(text.contains("Hi, Tuasddka!"));
    assert!(text.contains("Hi, Huska!"));
    assert!(!text.contains("asdasd"));
    assert!(text.contains("The time is"));
    assert!(text.contains("[ Say hi ]"));
}

#[test]
fn test_greeting_alert_overlay() {
    let mut screen = GreetingScreen::new();
    for c in "typed".chars() {
        screen.handle_key(key(KeyCode::Char(c)));
    }
    screen.handle_key(key(KeyCode::Tab));
    screen.handle_key(key(KeyCode::Enter));
    let text = render(&screen);
    assert!(text.contains("Alert"));
    assert!(text.contains("[ OK ]"));
    assert!(text.contains("typed"));

    screen.handle_key(key(KeyCode::Enter));
    assert!(!render(&screen).contains("[ OK ]"));
}

#[test]
fn test_tictactoe_screen_renders_status_and_selectors() {
    let config = AppConfig::default().with_overrides(Some(BoardSize::Four), None, Some(5));
    let screen = TicTacToeScreen::new(config.tictactoe(), *config.animation());
    let text = render(&screen);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("< 4x4 >"));
    assert!(text.contains("< Human vs Human >"));
    assert!(text.contains("Player X's turn"));
}

#[test]
fn test_tictactoe_marks_animate_in() {
    let config = AppConfig::default().with_overrides(None, None, Some(5));
    let mut screen = TicTacToeScreen::new(config.tictactoe(), AnimationConfig::new(100, 100, 200));
    let start = Instant::now();
    screen.tick(start);
    screen.handle_key(key(KeyCode::Enter));

    // Nothing drawn at the instant of the click.
    assert!(!render(&screen).contains("\\   /"));

    screen.tick(start + Duration::from_secs(1));
    let text = render(&screen);
    assert!(text.contains("\\   /"));
    assert!(text.contains("  X  "));
}

#[test]
fn test_tictactoe_computer_reply_drawn_after_human_mark() {
    let config = AppConfig::default().with_overrides(None, Some(GameMode::HumanVsComputer), Some(11));
    let mut screen = TicTacToeScreen::new(config.tictactoe(), AnimationConfig::new(100, 100, 200));
    let start = Instant::now();
    screen.tick(start);
    screen.handle_key(key(KeyCode::Enter));
    assert_eq!(screen.game().board().count(Mark::O), 1);

    // X is fully drawn at 200ms, the O reply only begins then.
    screen.tick(start + Duration::from_millis(200));
    assert!(!render(&screen).contains("(   )"));

    screen.tick(start + Duration::from_millis(500));
    assert!(render(&screen).contains("(   )"));
}

#[test]
fn test_tictactoe_tie_status() {
    let config = AppConfig::default().with_overrides(None, None, Some(5));
    let mut screen = TicTacToeScreen::new(config.tictactoe(), AnimationConfig::new(0, 0, 0));
    // Cursor starts at the center (4). Final board: X O X / X O O / O X X
    let path: [(&[KeyCode], usize); 9] = [
        (&[KeyCode::Up, KeyCode::Left], 0),
        (&[KeyCode::Right], 1),
        (&[KeyCode::Right], 2),
        (&[KeyCode::Down, KeyCode::Left], 4),
        (&[KeyCode::Left], 3),
        (&[KeyCode::Right, KeyCode::Right], 5),
        (&[KeyCode::Down, KeyCode::Left], 7),
        (&[KeyCode::Left], 6),
        (&[KeyCode::Right, KeyCode::Right], 8),
    ];
    for (moves, expected) in path {
        for m in moves {
            screen.handle_key(key(*m));
        }
        assert_eq!(screen.cursor(), expected);
        screen.handle_key(key(KeyCode::Enter));
    }
    assert_eq!(screen.status(), "It's a tie! Press 'r' to restart.");
    assert!(render(&screen).contains("It's a tie!"));
}
