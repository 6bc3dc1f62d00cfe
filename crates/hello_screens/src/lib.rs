//! Hello Screens library - terminal renditions of two small UI demos
//!
//! # Architecture
//!
//! - **Screens**: a hello-world greeting screen and a tic-tac-toe screen
//! - **Components**: say-hi greeting, clock, text input, alert dialog
//! - **Animation**: stroke-by-stroke mark drawing
//! - **Runner**: terminal setup and the draw/poll/dispatch loop
//! - **Config**: TOML settings with command-line overrides
//!
//! Game rules live in the `tictactoe_rules` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod animation;
mod cli;
mod components;
mod config;
mod logging;
mod runner;
mod screen;
mod screens;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{
    AnimationConfig, AppConfig, ConfigError, DEFAULT_CONFIG_PATH, LoggingConfig, TicTacToeConfig,
};

// Crate-level exports - Logging
pub use logging::init_logging;

// Crate-level exports - Screen machinery
pub use runner::{run_loop, run_screen};
pub use screen::{Screen, ScreenTransition};

// Crate-level exports - Screens
pub use screens::{ALERT_MESSAGE, Focus, GreetingFocus, GreetingScreen, TicTacToeScreen};

// Crate-level exports - Components
pub use components::{Alert, Clock, SayHi, SayHiProps, TextInput};

// Crate-level exports - Animation
pub use animation::{GLYPH_HEIGHT, GLYPH_WIDTH, MarkAnimations, mark_glyph};
