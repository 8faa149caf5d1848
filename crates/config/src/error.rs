use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("board of {width}x{height} cells is too small to play; enlarge the terminal or set [board] dimensions")]
    BoardTooSmall { width: u16, height: u16 },
}
