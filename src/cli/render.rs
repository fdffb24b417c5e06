//! Render command: letter tiles to printable pages.

use crate::cli::common::{load_config, resolve_output, CliError, CliResult, TileOverrides};
use crate::config::{Config, OutputFormat};
use crate::models::ScoreTable;
use crate::output::{self, HtmlPrintSink, PageSink, SvgDirectorySink};
use crate::render::{render_pages, PageDrawing};
use crate::sequence::build_sequence;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render letter tiles as millimetre-accurate pages
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Tile count and size overrides
    #[command(flatten)]
    pub tiles: TileOverrides,

    /// Output format: svg (one file per page) or html (one print document)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output directory (svg) or file (html)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Only draw occupied cells on the last page
    #[arg(long)]
    pub no_blank_fill: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let mut config = load_config(config_path)?;
        self.tiles.apply(&mut config)?;
        if self.no_blank_fill {
            config.style.blank_fill = false;
        }

        let format = match &self.format {
            Some(f) => OutputFormat::parse(f).map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.format,
        };

        let pages = render_config(&config);
        if pages.is_empty() {
            println!("No tiles to render (all counts and spares are zero).");
            return Ok(());
        }

        let mut sink = self.sink(format, &config);
        let docs: Vec<_> = pages.iter().map(PageDrawing::to_document).collect();
        let written = output::write_all(sink.as_mut(), docs.iter())
            .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;

        for path in &written {
            println!("✓ Wrote {}", path.display());
        }

        let tiles: usize = pages.iter().map(PageDrawing::visible_count).sum();
        info!(tiles, pages = pages.len(), "render complete");
        println!(
            "{} tiles on {} page(s) at {} mm",
            tiles,
            pages.len(),
            crate::output::format_mm(config.tiles.tile_size_mm)
        );

        Ok(())
    }

    fn sink(&self, format: OutputFormat, config: &Config) -> Box<dyn PageSink> {
        match format {
            OutputFormat::Svg => {
                let dir = self
                    .out
                    .clone()
                    .unwrap_or_else(|| config.output.directory.clone());
                Box::new(SvgDirectorySink::new(dir))
            }
            OutputFormat::Html => {
                let path = resolve_output(self.out.as_ref(), config, "tiles.html");
                Box::new(HtmlPrintSink::new(path, "Letter tiles"))
            }
        }
    }
}

/// Builds the sequence once and lays out every page for `config`.
#[must_use]
pub fn render_config(config: &Config) -> Vec<PageDrawing> {
    let sequence = build_sequence(&config.letters, config.tiles.spares);
    render_pages(
        &sequence,
        &config.geometry(),
        ScoreTable::standard(),
        &config.style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterInventory;

    #[test]
    fn test_render_config_default() {
        let pages = render_config(&Config::new());
        assert_eq!(pages.len(), 18);
    }

    #[test]
    fn test_render_config_empty() {
        let mut config = Config::new();
        config.letters = LetterInventory::new();
        config.tiles.spares = 0;
        assert!(render_config(&config).is_empty());
    }
}
