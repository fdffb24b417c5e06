//! Board template tiling.
//!
//! Cuts a pre-authored board SVG into square sub-regions and places them on a
//! single landscape page so the board can be printed in pieces at a known
//! physical size. Independent of the letter tile pipeline.

use crate::output::{format_mm, SvgDocument};
use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, warn};

/// viewBox assumed when the template does not declare a usable one.
pub const DEFAULT_VIEW_BOX: ViewBox = ViewBox {
    min_x: 0.0,
    min_y: 0.0,
    width: 3300.0,
    height: 2550.0,
};

static VIEW_BOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<svg\b[^>]*?\sviewBox\s*=\s*["']([^"']*)["']"#).expect("valid regex")
});

static PROLOG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:<\?xml.*?\?>\s*|<!DOCTYPE[^>]*>\s*|<!--.*?-->\s*)*")
        .expect("valid regex")
});

/// Errors raised while loading a board template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("Failed to read template {path:?}: {source}")]
    Read {
        /// Template file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content has no `<svg>` root element
    #[error("Template is not an SVG document (no <svg> element found)")]
    NotSvg,
}

/// An SVG `viewBox` rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge
    pub min_x: f64,
    /// Top edge
    pub min_y: f64,
    /// Width in template units
    pub width: f64,
    /// Height in template units
    pub height: f64,
}

impl ViewBox {
    /// Parses `"min-x min-y width height"` (space and/or comma separated).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<f64> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<_, _>>()
            .ok()?;

        match parts.as_slice() {
            &[min_x, min_y, width, height] if width > 0.0 && height > 0.0 => Some(Self {
                min_x,
                min_y,
                width,
                height,
            }),
            _ => None,
        }
    }
}

/// A loaded board template.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardTemplate {
    /// Coordinate system of the template
    pub view_box: ViewBox,
    /// Template markup without XML prolog or doctype
    pub body: String,
}

impl BoardTemplate {
    /// Parses template markup.
    pub fn parse(svg_text: &str) -> Result<Self, TemplateError> {
        if !svg_text.contains("<svg") {
            return Err(TemplateError::NotSvg);
        }

        let view_box = match VIEW_BOX_RE
            .captures(svg_text)
            .and_then(|caps| ViewBox::parse(&caps[1]))
        {
            Some(vb) => vb,
            None => {
                warn!("template has no usable viewBox, assuming 0 0 3300 2550");
                DEFAULT_VIEW_BOX
            }
        };

        let body = PROLOG_RE.replace(svg_text, "").trim().to_string();
        debug!(?view_box, bytes = body.len(), "parsed board template");

        Ok(Self { view_box, body })
    }

    /// Reads and parses a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

/// Fixed constants of the board print layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateLayout {
    /// Sub-square side in template units
    pub square_units: f64,
    /// Sub-square rows
    pub rows: u32,
    /// Sub-square columns
    pub columns: u32,
    /// Printed side of each sub-square
    pub square_mm: f64,
    /// Page width (US Letter landscape)
    pub page_width_mm: f64,
    /// Page height (US Letter landscape)
    pub page_height_mm: f64,
    /// Page margin on all sides
    pub margin_mm: f64,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            square_units: 330.0,
            rows: 7,
            columns: 10,
            square_mm: 25.0,
            page_width_mm: 279.4,
            page_height_mm: 215.9,
            margin_mm: 12.7,
        }
    }
}

impl TemplateLayout {
    /// Number of sub-squares on the page.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Renders the tiled board page.
#[must_use]
pub fn render_board_page(template: &BoardTemplate, layout: &TemplateLayout) -> SvgDocument {
    let w = format_mm(layout.page_width_mm);
    let h = format_mm(layout.page_height_mm);
    let vb = template.view_box;
    let unit = layout.square_units;
    let size = format_mm(layout.square_mm);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
    );
    out.push_str("  <defs>\n");
    let _ = writeln!(
        out,
        r#"    <symbol id="board" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid slice">"#,
        format_mm(vb.min_x),
        format_mm(vb.min_y),
        format_mm(vb.width),
        format_mm(vb.height)
    );
    out.push_str(&template.body);
    out.push_str("\n    </symbol>\n  </defs>\n");

    for row in 0..layout.rows {
        for col in 0..layout.columns {
            let src_x = f64::from(col) * unit;
            let src_y = f64::from(row) * unit;
            let x = layout.margin_mm + f64::from(col) * layout.square_mm;
            let y = layout.margin_mm + f64::from(row) * layout.square_mm;
            let _ = writeln!(
                out,
                r##"  <svg x="{}" y="{}" width="{size}" height="{size}" viewBox="{} {} {u} {u}"><use href="#board" xlink:href="#board" width="{}" height="{}"/></svg>"##,
                format_mm(x),
                format_mm(y),
                format_mm(src_x),
                format_mm(src_y),
                format_mm(vb.width),
                format_mm(vb.height),
                u = format_mm(unit),
            );
        }
    }

    out.push_str("</svg>\n");

    SvgDocument {
        name: "board".to_string(),
        width_mm: layout.page_width_mm,
        height_mm: layout.page_height_mm,
        markup: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 3300 2310"><rect width="330" height="330"/></svg>
"#;

    #[test]
    fn test_view_box_parse() {
        assert_eq!(
            ViewBox::parse("0 0 3300 2550"),
            Some(ViewBox {
                min_x: 0.0,
                min_y: 0.0,
                width: 3300.0,
                height: 2550.0
            })
        );
        assert!(ViewBox::parse("0,0,10,20").is_some());
        assert!(ViewBox::parse("0 0 10").is_none());
        assert!(ViewBox::parse("0 0 -1 10").is_none());
        assert!(ViewBox::parse("a b c d").is_none());
    }

    #[test]
    fn test_parse_reads_view_box_and_strips_prolog() {
        let template = BoardTemplate::parse(SAMPLE).unwrap();
        assert!((template.view_box.height - 2310.0).abs() < f64::EPSILON);
        assert!(template.body.starts_with("<svg"));
        assert!(!template.body.contains("<?xml"));
        assert!(!template.body.contains("DOCTYPE"));
    }

    #[test]
    fn test_parse_defaults_view_box() {
        let template = BoardTemplate::parse("<svg><circle r=\"5\"/></svg>").unwrap();
        assert_eq!(template.view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_parse_rejects_non_svg() {
        assert!(matches!(
            BoardTemplate::parse("<html></html>"),
            Err(TemplateError::NotSvg)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BoardTemplate::load(Path::new("/nonexistent/board.svg")).unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }

    #[test]
    fn test_render_board_page() {
        let template = BoardTemplate::parse(SAMPLE).unwrap();
        let layout = TemplateLayout::default();
        let doc = render_board_page(&template, &layout);

        assert_eq!(layout.square_count(), 70);
        assert!(doc.markup.contains(r#"width="279.4mm" height="215.9mm""#));
        assert!(doc.markup.contains(r#"viewBox="0 0 279.4 215.9""#));
        assert!(doc.markup.contains(r#"<symbol id="board" viewBox="0 0 3300 2310""#));
        assert_eq!(doc.markup.matches("<use ").count(), 70);
        assert!(doc.markup.contains(r#"x="12.7" y="12.7" width="25" height="25" viewBox="0 0 330 330""#));
        assert!(doc.markup.contains(r#"x="237.7" y="162.7" width="25" height="25" viewBox="2970 1980 330 330""#));
    }
}
