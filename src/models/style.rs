//! Presentation settings for a single tile.

use super::rgb::RgbColor;
use serde::{Deserialize, Serialize};

/// How a tile square and its text are drawn.
///
/// Font sizes are ratios of the tile size so the look scales with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileStyle {
    /// Square fill color
    pub fill: RgbColor,
    /// Outline color
    pub stroke: RgbColor,
    /// Outline width in millimetres
    pub stroke_width_mm: f64,
    /// Letter font size as a fraction of the tile size
    pub letter_ratio: f64,
    /// Score font size as a fraction of the tile size
    pub score_ratio: f64,
    /// Score anchor position as a fraction of the tile size (both axes)
    pub score_offset: f64,
    /// CSS font family for letter and score
    pub font_family: String,
    /// Draw empty squares for the unused cells of the last page
    pub blank_fill: bool,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            fill: RgbColor::new(231, 203, 155),
            stroke: RgbColor::new(0, 0, 0),
            stroke_width_mm: 0.5,
            letter_ratio: 0.6,
            score_ratio: 0.2,
            score_offset: 0.8,
            font_family: "sans-serif".to_string(),
            blank_fill: true,
        }
    }
}
