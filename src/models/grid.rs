//! Page grid geometry in millimetres.

use serde::{Deserialize, Serialize};

/// Fixed grid placement for every page of one render pass.
///
/// The grid is offset from the page origin by `padding_mm` on all sides,
/// so the page is exactly the grid plus twice the padding on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Side length of one square tile
    pub tile_size_mm: f64,
    /// Tile rows per page
    pub rows: u32,
    /// Tile columns per page
    pub columns: u32,
    /// Blank border around the grid
    pub padding_mm: f64,
}

impl GridGeometry {
    /// Creates a geometry from its parts.
    #[must_use]
    pub const fn new(tile_size_mm: f64, rows: u32, columns: u32, padding_mm: f64) -> Self {
        Self {
            tile_size_mm,
            rows,
            columns,
            padding_mm,
        }
    }

    /// Number of tile cells on a full page.
    #[must_use]
    pub fn tiles_per_page(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Physical page width.
    #[must_use]
    pub fn page_width_mm(&self) -> f64 {
        f64::from(self.columns) * self.tile_size_mm + 2.0 * self.padding_mm
    }

    /// Physical page height.
    #[must_use]
    pub fn page_height_mm(&self) -> f64 {
        f64::from(self.rows) * self.tile_size_mm + 2.0 * self.padding_mm
    }

    /// Top-left corner of the first cell.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.padding_mm, self.padding_mm)
    }

    /// Row and column of a cell, filled row by row.
    #[must_use]
    pub fn cell_position(&self, local_index: usize) -> (usize, usize) {
        let columns = (self.columns as usize).max(1);
        (local_index / columns, local_index % columns)
    }

    /// Top-left corner of the cell at `local_index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_origin(&self, local_index: usize) -> (f64, f64) {
        let (row, col) = self.cell_position(local_index);
        let (start_x, start_y) = self.origin();
        (
            start_x + col as f64 * self.tile_size_mm,
            start_y + row as f64 * self.tile_size_mm,
        )
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(25.0, 7, 10, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_geometry() {
        let geo = GridGeometry::default();
        assert_eq!(geo.tiles_per_page(), 70);
        assert!((geo.page_width_mm() - 270.0).abs() < 1e-9);
        assert!((geo.page_height_mm() - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_cell_origin_row_major() {
        let geo = GridGeometry::default();
        assert_eq!(geo.cell_origin(0), (10.0, 10.0));
        assert_eq!(geo.cell_origin(9), (235.0, 10.0));
        assert_eq!(geo.cell_origin(10), (10.0, 35.0));
        assert_eq!(geo.cell_position(69), (6, 9));
    }
}
