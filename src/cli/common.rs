//! Shared CLI plumbing: errors, exit codes, config loading, and overrides.

use crate::config::Config;
use crate::models::LetterInventory;
use clap::Args;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit codes.
///
/// Code 2 is left to clap, which uses it for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid arguments or configuration
    Validation = 1,
    /// File system failure
    Io = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Error raised by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad input from the user
    #[error("{0}")]
    Validation(String),
    /// Reading or writing files failed
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::Validation,
            Self::Io(_) => ExitCode::Io,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    };
    result.map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Per-invocation overrides for tile counts and size.
#[derive(Debug, Clone, Default, Args)]
pub struct TileOverrides {
    /// Spare tiles per letter (negative values count as 0)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub spares: Option<i64>,

    /// Tile size in millimetres (values below 1 are raised to 1)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub tile_size: Option<f64>,

    /// Override one letter's count, e.g. `--letter Q=4` (repeatable)
    #[arg(long = "letter", value_name = "LETTER=N")]
    pub letters: Vec<String>,

    /// Start from an inventory with every count at zero
    #[arg(long)]
    pub zero: bool,
}

impl TileOverrides {
    /// Applies the overrides to `config`, clamping as the input fields do.
    pub fn apply(&self, config: &mut Config) -> CliResult<()> {
        if self.zero {
            config.letters = LetterInventory::new();
        }
        if let Some(spares) = self.spares {
            config.tiles.spares = crate::models::clamp_count(spares);
        }
        if let Some(size) = self.tile_size {
            config.set_tile_size(size);
        }
        for assignment in &self.letters {
            let (letter, count) = LetterInventory::parse_assignment(assignment)
                .map_err(|e| CliError::validation(e.to_string()))?;
            config
                .letters
                .set(letter, count)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        Ok(())
    }

    /// True when no override was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spares.is_none() && self.tile_size.is_none() && self.letters.is_empty() && !self.zero
    }
}

/// Resolves an output path: explicit value, else `default` under the config's directory.
#[must_use]
pub fn resolve_output(explicit: Option<&PathBuf>, config: &Config, default: &str) -> PathBuf {
    explicit
        .cloned()
        .unwrap_or_else(|| config.output.directory.join(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Validation), 1);
        assert_eq!(i32::from(ExitCode::Io), 3);
        assert_eq!(CliError::validation("x").exit_code(), ExitCode::Validation);
        assert_eq!(CliError::io("x").exit_code(), ExitCode::Io);
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_overrides_clamp() {
        let overrides = TileOverrides {
            spares: Some(-4),
            tile_size: Some(0.0),
            letters: vec!["a=9".to_string(), "B=-1".to_string()],
            zero: false,
        };
        let mut config = Config::new();
        overrides.apply(&mut config).unwrap();

        assert_eq!(config.tiles.spares, 0);
        assert!((config.tiles.tile_size_mm - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.letters.get('A'), Some(9));
        assert_eq!(config.letters.get('B'), Some(0));
        assert_eq!(config.letters.get('C'), Some(27));
    }

    #[test]
    fn test_overrides_zero_then_letters() {
        let overrides = TileOverrides {
            letters: vec!["A=1".to_string()],
            zero: true,
            ..TileOverrides::default()
        };
        let mut config = Config::new();
        overrides.apply(&mut config).unwrap();
        assert_eq!(config.letters.total(), 1);
    }

    #[test]
    fn test_overrides_reject_bad_letter() {
        let overrides = TileOverrides {
            letters: vec!["1=2".to_string()],
            ..TileOverrides::default()
        };
        assert!(matches!(
            overrides.apply(&mut Config::new()),
            Err(CliError::Validation(_))
        ));
    }
}
