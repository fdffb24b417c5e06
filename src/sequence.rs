//! Tile sequence builder.
//!
//! Expands a [`LetterInventory`] plus a uniform spare count into the ordered
//! list of physical tiles: letters in ascending order, each in one contiguous
//! run of `count + spares` tiles.

use crate::models::LetterInventory;
use tracing::debug;

/// Ordered tiles to print, one entry per physical tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileSequence {
    tiles: Vec<char>,
}

impl TileSequence {
    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when there is nothing to print.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.tiles.get(index).copied()
    }

    /// All tiles in order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.tiles
    }

    /// Iterates over the tiles in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().copied()
    }

    /// The tiles assigned to page `page` when each page holds `tiles_per_page`.
    ///
    /// The final page is truncated; pages past the end are empty.
    #[must_use]
    pub fn page_slice(&self, page: usize, tiles_per_page: usize) -> &[char] {
        let start = page.saturating_mul(tiles_per_page).min(self.tiles.len());
        let end = start.saturating_add(tiles_per_page).min(self.tiles.len());
        &self.tiles[start..end]
    }

    /// `(letter, run_length)` for each contiguous run, in order.
    #[must_use]
    pub fn runs(&self) -> Vec<(char, usize)> {
        let mut runs: Vec<(char, usize)> = Vec::new();
        for tile in self.iter() {
            match runs.last_mut() {
                Some((letter, len)) if *letter == tile => *len += 1,
                _ => runs.push((tile, 1)),
            }
        }
        runs
    }
}

/// Builds the full tile sequence for an inventory.
///
/// Total and deterministic: the same inputs always give the same sequence,
/// and an all-zero inventory with no spares yields an empty one.
#[must_use]
pub fn build_sequence(inventory: &LetterInventory, spares: u32) -> TileSequence {
    let capacity = usize::try_from(inventory.total_with_spares(spares)).unwrap_or(0);
    let mut tiles = Vec::with_capacity(capacity);

    for (letter, count) in inventory.iter() {
        let run = count.saturating_add(spares) as usize;
        tiles.extend(std::iter::repeat(letter).take(run));
    }

    debug!(tiles = tiles.len(), spares, "built tile sequence");
    TileSequence { tiles }
}
