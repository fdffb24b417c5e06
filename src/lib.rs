//! Printable letter tiles for word-tile board games.
//!
//! The pipeline is one-directional: a [`models::LetterInventory`] and spare
//! count expand into a [`sequence::TileSequence`], which [`render`] splits into
//! pages of SVG at true physical scale. [`template`] tiles a board template
//! independently, and [`output`] hands documents to a file or print sink.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod output;
pub mod render;
pub mod sequence;
pub mod template;
