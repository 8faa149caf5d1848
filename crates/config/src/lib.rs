//! Configuration module - TOML settings for board, timing and colors
//!
//! Every setting has a default, so the file is optional and may set only the
//! keys it cares about:
//!
//! ```toml
//! [board]
//! width = 12          # columns; omitted = fill the terminal width
//! height = 20         # rows; omitted = 20 (or fewer on short terminals)
//!
//! [timing]
//! descent_interval_ms = 500
//! frame_rate = 30
//!
//! [colors]
//! piece = [255, 0, 0]
//! board = [0, 0, 255]
//! ```
//!
//! # Lookup order
//!
//! 1. An explicit path (the `--config` flag)
//! 2. The `FALLGRID_CONFIG` environment variable
//! 3. `<config dir>/fallgrid/config.toml` if it exists
//! 4. Built-in defaults
//!
//! An explicit or environment path that does not exist is an error; a missing
//! default file is not.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use fallgrid_core::GameConfig;
use fallgrid_types::{
    DEFAULT_BOARD_HEIGHT, DESCENT_INTERVAL_MS, FRAME_RATE, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH,
    MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "FALLGRID_CONFIG";

/// Highest accepted frame rate.
pub const MAX_FRAME_RATE: u32 = 240;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board: BoardConfig,
    pub timing: TimingConfig,
    pub colors: ColorConfig,
}

/// Board dimensions; `None` derives the value from the terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub descent_interval_ms: u32,
    pub frame_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            descent_interval_ms: DESCENT_INTERVAL_MS,
            frame_rate: FRAME_RATE,
        }
    }
}

/// Colors as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: [u8; 3],
    pub grid: [u8; 3],
    pub border: [u8; 3],
    pub board: [u8; 3],
    pub piece: [u8; 3],
    pub text: [u8; 3],
    pub button: [u8; 3],
    pub button_text: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            grid: [100, 100, 100],
            border: [200, 200, 200],
            board: [0, 0, 255],
            piece: [255, 0, 0],
            text: [255, 255, 255],
            button: [255, 255, 255],
            button_text: [0, 0, 0],
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl Config {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load using the standard lookup order (see module docs).
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let default_path = dirs::config_dir().map(|dir| dir.join("fallgrid").join("config.toml"));
        Self::discover_in(explicit, env_path.as_deref(), default_path.as_deref())
    }

    /// Lookup with the environment and platform paths passed in.
    pub fn discover_in(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
        default_path: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit.or(env_path) {
            let config = Self::load_from(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match default_path {
            Some(path) if path.is_file() => {
                let config = Self::load_from(path)?;
                Ok((config, ConfigSource::File(path.to_path_buf())))
            }
            _ => {
                debug!("no config file found, using defaults");
                Ok((Self::default(), ConfigSource::Defaults))
            }
        }
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(width) = self.board.width {
            if !(MIN_BOARD_WIDTH..=MAX_BOARD_WIDTH).contains(&width) {
                return Err(ConfigError::Invalid(format!(
                    "board.width must be between {MIN_BOARD_WIDTH} and {MAX_BOARD_WIDTH}, got {width}"
                )));
            }
        }
        if let Some(height) = self.board.height {
            if !(MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT).contains(&height) {
                return Err(ConfigError::Invalid(format!(
                    "board.height must be between {MIN_BOARD_HEIGHT} and {MAX_BOARD_HEIGHT}, got {height}"
                )));
            }
        }
        if self.timing.descent_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.descent_interval_ms must be greater than 0".into(),
            ));
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.timing.frame_rate) {
            return Err(ConfigError::Invalid(format!(
                "timing.frame_rate must be between 1 and {MAX_FRAME_RATE}, got {}",
                self.timing.frame_rate
            )));
        }
        Ok(())
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.timing.frame_rate.max(1)))
    }

    /// Resolve board dimensions against the largest board that fits the
    /// display (`fit` = columns, rows).
    ///
    /// Unset width fills the display up to the widest board; unset height is
    /// the default height, reduced to fit short displays.
    pub fn game_config(&self, fit: (u16, u16)) -> Result<GameConfig, ConfigError> {
        self.validate()?;
        let board_width = self
            .board
            .width
            .unwrap_or_else(|| fit.0.min(MAX_BOARD_WIDTH));
        let board_height = self
            .board
            .height
            .unwrap_or_else(|| DEFAULT_BOARD_HEIGHT.min(fit.1));

        if board_width < MIN_BOARD_WIDTH || board_height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooSmall {
                width: board_width,
                height: board_height,
            });
        }

        Ok(GameConfig {
            board_width,
            board_height,
            descent_interval_ms: self.timing.descent_interval_ms,
        })
    }
}
