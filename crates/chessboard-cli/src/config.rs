//! Configuration file loading for the command-line tool.
//!
//! Settings come from a TOML file: the path given with `--config`, or
//! `chessboard.toml` in the working directory when it exists. Every field is
//! optional; command-line flags take precedence over file values.

use chessboard_core::{NotationError, NotationFields};
use chessboard_engine::Position;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not valid notation.
    #[error("Invalid start position: {0}")]
    InvalidStartPosition(#[from] NotationError),
    /// Perft needs at least one ply.
    #[error("max_perft_depth must be at least 1")]
    InvalidPerftDepth,
}

/// Command-line tool configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Position used when a command is given no `--notation`.
    /// Defaults to the standard starting position.
    #[serde(default = "default_start_position")]
    pub start_position: String,
    /// Deepest perft the tool will run. Defaults to 6.
    #[serde(default = "default_max_perft_depth")]
    pub max_perft_depth: u32,
}

fn default_start_position() -> String {
    NotationFields::STARTPOS.to_string()
}

fn default_max_perft_depth() -> u32 {
    6
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_position: default_start_position(),
            max_perft_depth: default_max_perft_depth(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::default_path()`]
    /// is read if present, otherwise the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it is not valid TOML, or a validation
    /// error from [`Self::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let content = match path {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let default_path = Self::default_path();
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                std::fs::read_to_string(default_path)?
            }
        };
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the file read when no `--config` is given.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chessboard.toml")
    }

    /// Checks the start position decodes and the perft limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.start_position()?;
        if self.max_perft_depth == 0 {
            return Err(ConfigError::InvalidPerftDepth);
        }
        Ok(())
    }

    /// Decodes the configured start position.
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        Ok(Position::from_notation(&self.start_position)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
start_position = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"
max_perft_depth = 4
"#;

        let config = CliConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.start_position,
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"
        );
        assert_eq!(config.max_perft_depth, 4);
        assert!(config.start_position().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.start_position, NotationFields::STARTPOS);
        assert_eq!(config.max_perft_depth, 6);
    }

    #[test]
    fn test_invalid_toml() {
        let result = CliConfig::from_toml_str("max_perft_depth = [");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_start_position() {
        let result = CliConfig::from_toml_str(r#"start_position = "8/8/8 w - - 0 1""#);
        assert!(matches!(result, Err(ConfigError::InvalidStartPosition(_))));
    }

    #[test]
    fn test_zero_perft_depth() {
        let result = CliConfig::from_toml_str("max_perft_depth = 0");
        assert!(matches!(result, Err(ConfigError::InvalidPerftDepth)));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/chessboard.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
