//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the tile configuration
//! in TOML format with platform-specific directory resolution. It is also the
//! input boundary: every numeric value is clamped here so the core never sees
//! a negative count or a non-positive tile size.

use crate::models::{GridGeometry, LetterInventory, TileStyle};
use crate::output::write_atomic;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "TILEPRINT_CONFIG_DIR";

/// Default tile side length in millimetres.
pub const DEFAULT_TILE_SIZE_MM: f64 = 25.0;

/// Smallest tile size accepted after clamping.
pub const MIN_TILE_SIZE_MM: f64 = 1.0;

/// Largest tile size accepted after clamping.
pub const MAX_TILE_SIZE_MM: f64 = 1000.0;

/// Largest row or column count of the page grid.
pub const MAX_GRID_DIMENSION: u32 = 100;

/// Largest blank border around the grid.
pub const MAX_PADDING_MM: f64 = 1000.0;

/// Default number of spare tiles added to every letter.
pub const DEFAULT_SPARES: u32 = 2;

/// Normalizes a user-supplied tile size.
///
/// Non-finite values fall back to the default; the rest is held to
/// `MIN_TILE_SIZE_MM..=MAX_TILE_SIZE_MM`.
#[must_use]
pub fn clamp_tile_size(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(MIN_TILE_SIZE_MM, MAX_TILE_SIZE_MM)
    } else {
        DEFAULT_TILE_SIZE_MM
    }
}

/// Normalizes a row or column count to `1..=MAX_GRID_DIMENSION`.
#[must_use]
pub fn clamp_grid_dimension(raw: i64) -> u32 {
    u32::try_from(raw.clamp(1, i64::from(MAX_GRID_DIMENSION))).unwrap_or(MAX_GRID_DIMENSION)
}

/// Normalizes a padding to `0..=MAX_PADDING_MM`; non-finite values become 0.
#[must_use]
pub fn clamp_padding(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, MAX_PADDING_MM)
    } else {
        0.0
    }
}

fn de_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(crate::models::clamp_count)
}

fn de_grid_dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(clamp_grid_dimension)
}

fn de_tile_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_tile_size)
}

fn de_padding<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_padding)
}

/// Tile count and size settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Spare tiles added to every letter's count
    #[serde(deserialize_with = "de_count")]
    pub spares: u32,
    /// Side length of one tile
    #[serde(deserialize_with = "de_tile_size")]
    pub tile_size_mm: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            spares: DEFAULT_SPARES,
            tile_size_mm: DEFAULT_TILE_SIZE_MM,
        }
    }
}

/// Page grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Tile rows per page
    #[serde(deserialize_with = "de_grid_dimension")]
    pub rows: u32,
    /// Tile columns per page
    #[serde(deserialize_with = "de_grid_dimension")]
    pub columns: u32,
    /// Blank border around the grid
    #[serde(deserialize_with = "de_padding")]
    pub padding_mm: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            columns: 10,
            padding_mm: 10.0,
        }
    }
}

/// Output format for rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One SVG file per page
    #[default]
    Svg,
    /// A single print-ready HTML document
    Html,
}

impl OutputFormat {
    /// Parses `svg` or `html` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" => Ok(Self::Html),
            other => anyhow::bail!("Invalid output format '{other}'. Must be 'svg' or 'html'"),
        }
    }

    /// Lowercase name as used in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
        }
    }
}

/// Where rendered output goes by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory (SVG) or parent of the HTML file
    pub directory: PathBuf,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("tiles"),
            format: OutputFormat::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$TILEPRINT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/tileprint/config.toml`
/// - macOS: `~/Library/Application Support/tileprint/config.toml`
/// - Windows: `%APPDATA%\tileprint\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Tile counts and size
    pub tiles: TileConfig,
    /// Page grid
    pub grid: GridConfig,
    /// Tile appearance
    pub style: TileStyle,
    /// Base count per letter
    pub letters: LetterInventory,
    /// Output defaults
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring `TILEPRINT_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("tileprint");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(path, &content)
    }

    /// Validates configuration values.
    ///
    /// Clamping already keeps counts and sizes in range; this catches values
    /// that cannot be normalized, such as style ratios outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        let style = &self.style;
        for (name, value) in [
            ("style.letter_ratio", style.letter_ratio),
            ("style.score_ratio", style.score_ratio),
            ("style.score_offset", style.score_offset),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                anyhow::bail!("{name} must be in (0, 1], got {value}");
            }
        }

        if !style.stroke_width_mm.is_finite() || style.stroke_width_mm < 0.0 {
            anyhow::bail!(
                "style.stroke_width_mm must be non-negative, got {}",
                style.stroke_width_mm
            );
        }

        if style.font_family.trim().is_empty() {
            anyhow::bail!("style.font_family must not be empty");
        }

        Ok(())
    }

    /// Applies the clamping rule to a tile size typed by the user.
    pub fn set_tile_size(&mut self, raw: f64) {
        self.tiles.tile_size_mm = clamp_tile_size(raw);
    }

    /// Grid geometry for one render pass.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(
            clamp_tile_size(self.tiles.tile_size_mm),
            clamp_grid_dimension(i64::from(self.grid.rows)),
            clamp_grid_dimension(i64::from(self.grid.columns)),
            clamp_padding(self.grid.padding_mm),
        )
    }
}
