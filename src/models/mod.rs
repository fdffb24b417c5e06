//! Data models for tile inventories, scores, and page geometry.
//!
//! Models are plain values with no I/O; the configuration layer owns them and
//! hands them by reference to the sequence builder and page renderer.

pub mod grid;
pub mod inventory;
pub mod rgb;
pub mod score;
pub mod style;

// Re-export all model types
pub use grid::GridGeometry;
pub use inventory::{
    clamp_count, letter_index, LetterInventory, LETTERS, LETTER_COUNT, MAX_COUNT,
};
pub use rgb::RgbColor;
pub use score::ScoreTable;
pub use style::TileStyle;
