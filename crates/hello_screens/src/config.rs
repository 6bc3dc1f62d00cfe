//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_rules::{BoardSize, GameMode};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "hello_screens.toml";

/// Top-level configuration.
///
/// Every section is optional in the file; missing keys fall back to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct AppConfig {
    /// Tic-tac-toe screen settings.
    tictactoe: TicTacToeConfig,
    /// Mark animation timing.
    animation: AnimationConfig,
    /// Log output.
    logging: LoggingConfig,
}

/// Starting settings for the tic-tac-toe screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Initial board size (3, 4 or 5).
    board_size: BoardSize,
    /// Initial game mode ("human" or "computer").
    game_mode: GameMode,
    /// Seed for the computer's moves; random when absent.
    seed: Option<u64>,
}

/// Timing of the mark drawing animation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time to draw one stroke of an X.
    stroke_ms: u64,
    /// Delay before the second stroke of an X starts.
    second_stroke_delay_ms: u64,
    /// Time to trace an O.
    circle_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stroke_ms: 250,
            second_stroke_delay_ms: 250,
            circle_ms: 500,
        }
    }
}

impl AnimationConfig {
    /// Duration of one X stroke.
    pub fn stroke(&self) -> Duration {
        Duration::from_millis(self.stroke_ms)
    }

    /// Delay before the second X stroke.
    pub fn second_stroke_delay(&self) -> Duration {
        Duration::from_millis(self.second_stroke_delay_ms)
    }

    /// Duration of the O trace.
    pub fn circle(&self) -> Duration {
        Duration::from_millis(self.circle_ms)
    }

    /// Time until an X is completely drawn.
    pub fn cross_total(&self) -> Duration {
        self.second_stroke_delay() + self.stroke()
    }
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; the terminal is owned by the UI.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("hello_screens.log"),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit config file, or the default one if present.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<BoardSize>,
        game_mode: Option<GameMode>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(size) = board_size {
            self.tictactoe.board_size = size;
        }
        if let Some(mode) = game_mode {
            self.tictactoe.game_mode = mode;
        }
        if seed.is_some() {
            self.tictactoe.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.tictactoe().board_size(), BoardSize::Three);
        assert_eq!(*config.tictactoe().game_mode(), GameMode::HumanVsHuman);
        assert_eq!(config.animation().cross_total(), Duration::from_millis(500));
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_toml_str(
            r#"
            [tictactoe]
            board_size = 5
            game_mode = "computer"
            seed = 7

            [animation]
            stroke_ms = 100
            second_stroke_delay_ms = 50
            circle_ms = 300

            [logging]
            file = "/tmp/screens.log"
            "#,
        )
        .unwrap();
        assert_eq!(*config.tictactoe().board_size(), BoardSize::Five);
        assert_eq!(*config.tictactoe().game_mode(), GameMode::HumanVsComputer);
        assert_eq!(*config.tictactoe().seed(), Some(7));
        assert_eq!(config.animation().cross_total(), Duration::from_millis(150));
        assert_eq!(config.logging().file(), &PathBuf::from("/tmp/screens.log"));
    }

    #[test]
    fn test_invalid_board_size_rejected() {
        let err = AppConfig::from_toml_str("[tictactoe]\nboard_size = 6\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(AppConfig::from_toml_str("[tictactoe]\ngame_mode = \"robot\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tictactoe]\nboard_size = 4").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(*config.tictactoe().board_size(), BoardSize::Four);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = AppConfig::from_toml_str("[tictactoe]\nboard_size = 4\nseed = 1\n")
            .unwrap()
            .with_overrides(Some(BoardSize::Five), Some(GameMode::HumanVsComputer), None);
        assert_eq!(*config.tictactoe().board_size(), BoardSize::Five);
        assert_eq!(*config.tictactoe().game_mode(), GameMode::HumanVsComputer);
        assert_eq!(*config.tictactoe().seed(), Some(1));
    }
}
