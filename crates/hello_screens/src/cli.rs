//! Command-line interface for hello_screens.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_rules::{BoardSize, GameMode};

/// Hello Screens - terminal greeting and tic-tac-toe demos
#[derive(Parser, Debug)]
#[command(name = "hello_screens")]
#[command(about = "Greeting and tic-tac-toe screens in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./hello_screens.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Screen to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available screens
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the hello-world greeting screen
    Greeting,

    /// Play tic-tac-toe
    Tictactoe {
        /// Board size: 3, 4 or 5
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Game mode: human or computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Parses a board size argument.
fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let n: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    BoardSize::try_from(n).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tictactoe_flags() {
        let cli = Cli::try_parse_from([
            "hello_screens",
            "tictactoe",
            "--size",
            "4",
            "--mode",
            "computer",
            "--seed",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Tictactoe { size, mode, seed } => {
                assert_eq!(size, Some(BoardSize::Four));
                assert_eq!(mode, Some(GameMode::HumanVsComputer));
                assert_eq!(seed, Some(9));
            }
            Command::Greeting => panic!("expected tictactoe"),
        }
    }

    #[test]
    fn test_rejects_bad_size() {
        assert!(Cli::try_parse_from(["hello_screens", "tictactoe", "--size", "7"]).is_err());
        assert!(Cli::try_parse_from(["hello_screens", "tictactoe", "--size", "big"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["hello_screens", "greeting", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Command::Greeting));
    }
}
