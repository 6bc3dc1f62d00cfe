//! Hello Screens - terminal greeting and tic-tac-toe demos.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use hello_screens::{AppConfig, Cli, Command, GreetingScreen, TicTacToeScreen, init_logging, run_screen};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(config.logging().file())?;

    match cli.command {
        Command::Greeting => {
            info!("Starting greeting screen");
            run_screen(GreetingScreen::new()).await
        }
        Command::Tictactoe { size, mode, seed } => {
            let config = config.with_overrides(size, mode, seed);
            info!(
                size = %config.tictactoe().board_size(),
                mode = %config.tictactoe().game_mode(),
                "Starting tic-tac-toe screen"
            );
            run_screen(TicTacToeScreen::new(config.tictactoe(), *config.animation())).await
        }
    }
}
