//! Screen implementations.

mod greeting;
mod tictactoe;

pub use greeting::{ALERT_MESSAGE, GreetingFocus, GreetingScreen};
pub use tictactoe::{Focus, TicTacToeScreen};
