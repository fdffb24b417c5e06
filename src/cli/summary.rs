//! Summary command: tile totals and pagination without writing files.

use crate::cli::common::{load_config, CliError, CliResult, TileOverrides};
use crate::config::Config;
use crate::models::ScoreTable;
use crate::render::page_count;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Show tile totals, page count, and per-letter counts
#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Tile count and size overrides
    #[command(flatten)]
    pub tiles: TileOverrides,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable summary
#[derive(Debug, Serialize)]
pub struct Summary {
    spares: u32,
    tile_size_mm: f64,
    tiles_per_page: usize,
    total_tiles: usize,
    pages: usize,
    last_page_tiles: usize,
    letters: Vec<LetterLine>,
}

#[derive(Debug, Serialize)]
struct LetterLine {
    letter: char,
    count: u32,
    tiles: u32,
    score: u32,
}

impl Summary {
    /// Computes the summary for a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let spares = config.tiles.spares;
        let total_tiles = usize::try_from(config.letters.total_with_spares(spares))
            .unwrap_or(usize::MAX);
        let tiles_per_page = config.geometry().tiles_per_page();
        let pages = page_count(total_tiles, tiles_per_page);
        let last_page_tiles = match pages {
            0 => 0,
            n => total_tiles - (n - 1) * tiles_per_page,
        };

        let scores = ScoreTable::standard();
        let letters = config
            .letters
            .iter()
            .map(|(letter, count)| LetterLine {
                letter,
                count,
                tiles: count.saturating_add(spares),
                score: scores.score(letter).unwrap_or_default(),
            })
            .collect();

        Self {
            spares,
            tile_size_mm: config.tiles.tile_size_mm,
            tiles_per_page,
            total_tiles,
            pages,
            last_page_tiles,
            letters,
        }
    }
}

impl SummaryArgs {
    /// Execute the summary command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let mut config = load_config(config_path)?;
        self.tiles.apply(&mut config)?;
        let summary = Summary::from_config(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::io(format!("Failed to serialize summary: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&summary);
        }

        Ok(())
    }
}

fn print_human_readable(summary: &Summary) {
    println!("Tiles");
    println!("  Total:          {}", summary.total_tiles);
    println!("  Spares/letter:  {}", summary.spares);
    println!(
        "  Tile size:      {} mm",
        crate::output::format_mm(summary.tile_size_mm)
    );
    println!();
    println!("Pages");
    println!("  Tiles per page: {}", summary.tiles_per_page);
    println!("  Pages:          {}", summary.pages);
    println!("  Last page:      {}", summary.last_page_tiles);
    println!();
    println!("Letter  Count  Tiles  Score");
    for line in &summary.letters {
        println!(
            "  {}     {:>5}  {:>5}  {:>5}",
            line.letter, line.count, line.tiles, line.score
        );
    }
}
