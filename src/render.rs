//! Page layout renderer.
//!
//! Partitions a [`TileSequence`] into fixed-size pages and lays each page out
//! as a grid of square tiles at true physical scale (1 SVG unit = 1 mm).

use crate::models::{GridGeometry, ScoreTable, TileStyle};
use crate::output::{escape_xml, format_mm, SvgDocument};
use crate::sequence::TileSequence;
use std::fmt::Write as _;
use tracing::debug;

/// One grid cell on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCell {
    /// Index of the cell within its page
    pub local_index: usize,
    /// Grid row (0-based, top to bottom)
    pub row: usize,
    /// Grid column (0-based, left to right)
    pub column: usize,
    /// Left edge of the square
    pub x_mm: f64,
    /// Top edge of the square
    pub y_mm: f64,
    /// Printed letter; `None` for a blank cell
    pub letter: Option<char>,
    /// Printed score; present exactly when `letter` is
    pub score: Option<u32>,
}

impl TileCell {
    /// True when the cell carries a letter.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.letter.is_some()
    }
}

/// A fully laid-out page, ready to be turned into SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDrawing {
    /// Page index (0-based)
    pub index: usize,
    /// Physical page width
    pub width_mm: f64,
    /// Physical page height
    pub height_mm: f64,
    /// Side length of each square
    pub tile_size_mm: f64,
    /// Cells in row-major order
    pub cells: Vec<TileCell>,
    style: TileStyle,
}

/// Number of pages needed for `tiles` tiles.
///
/// Returns 0 for no tiles or a grid without cells.
#[must_use]
pub fn page_count(tiles: usize, tiles_per_page: usize) -> usize {
    if tiles_per_page == 0 {
        return 0;
    }
    tiles.div_ceil(tiles_per_page)
}

/// Lays out every page for `sequence`.
///
/// The geometry is fixed for the whole pass. When `style.blank_fill` is set,
/// each page holds `tiles_per_page` cells and the tail of the final page is
/// blank; otherwise only occupied cells are produced.
#[must_use]
pub fn render_pages(
    sequence: &TileSequence,
    geometry: &GridGeometry,
    scores: &ScoreTable,
    style: &TileStyle,
) -> Vec<PageDrawing> {
    let per_page = geometry.tiles_per_page();
    let pages = page_count(sequence.len(), per_page);
    debug!(tiles = sequence.len(), per_page, pages, "laying out pages");

    (0..pages)
        .map(|page| {
            let slice = sequence.page_slice(page, per_page);
            let cell_total = if style.blank_fill { per_page } else { slice.len() };

            let cells = (0..cell_total)
                .map(|i| {
                    let (row, column) = geometry.cell_position(i);
                    let (x_mm, y_mm) = geometry.cell_origin(i);
                    let letter = slice.get(i).copied();
                    TileCell {
                        local_index: i,
                        row,
                        column,
                        x_mm,
                        y_mm,
                        letter,
                        score: letter.and_then(|l| scores.score(l)),
                    }
                })
                .collect();

            PageDrawing {
                index: page,
                width_mm: geometry.page_width_mm(),
                height_mm: geometry.page_height_mm(),
                tile_size_mm: geometry.tile_size_mm,
                cells,
                style: style.clone(),
            }
        })
        .collect()
}

impl PageDrawing {
    /// Cells that carry a letter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visible()).count()
    }

    /// Cells drawn without a letter.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.len() - self.visible_count()
    }

    /// Renders the page as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let w = format_mm(self.width_mm);
        let h = format_mm(self.height_mm);
        let size = self.tile_size_mm;
        let style = &self.style;

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(
            out,
            r#"  <g font-family="{}" text-anchor="middle" dominant-baseline="central">"#,
            escape_xml(&style.font_family)
        );

        for cell in &self.cells {
            let _ = writeln!(
                out,
                r#"    <g transform="translate({},{})">"#,
                format_mm(cell.x_mm),
                format_mm(cell.y_mm)
            );
            let _ = writeln!(
                out,
                r#"      <rect width="{s}" height="{s}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
                style.fill.to_svg(),
                style.stroke.to_svg(),
                format_mm(style.stroke_width_mm),
                s = format_mm(size),
            );

            if let Some(letter) = cell.letter {
                let mut buf = [0u8; 4];
                let _ = writeln!(
                    out,
                    r#"      <text class="letter" x="{c}" y="{c}" font-size="{}">{}</text>"#,
                    format_mm(size * style.letter_ratio),
                    escape_xml(letter.encode_utf8(&mut buf)),
                    c = format_mm(size / 2.0),
                );
                if let Some(score) = cell.score {
                    let _ = writeln!(
                        out,
                        r#"      <text class="score" x="{o}" y="{o}" font-size="{}">{score}</text>"#,
                        format_mm(size * style.score_ratio),
                        o = format_mm(size * style.score_offset),
                    );
                }
            }

            out.push_str("    </g>\n");
        }

        out.push_str("  </g>\n</svg>\n");
        out
    }

    /// Packages the page for an output sink.
    #[must_use]
    pub fn to_document(&self) -> SvgDocument {
        SvgDocument {
            name: format!("page-{:02}", self.index + 1),
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            markup: self.to_svg(),
        }
    }
}
