//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult, TileOverrides};
use crate::config::{clamp_grid_dimension, clamp_padding, Config, OutputFormat};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Restore the default configuration
    Reset,
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    #[command(flatten)]
    tiles: TileOverrides,

    /// Tile rows per page (clamped to 1-100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Tile columns per page (clamped to 1-100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    columns: Option<i64>,

    /// Blank border around the grid in millimetres
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    padding: Option<f64>,

    /// Default output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default output format (svg or html)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
            ConfigCommand::Reset => {
                let path = save(&Config::new(), config_path)?;
                println!("✓ Restored defaults in {}", path.display());
                Ok(())
            }
            ConfigCommand::Path => {
                println!("{}", target_path(config_path)?.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;

        if self.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize config: {e}")))?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn has_changes(&self) -> bool {
        !self.tiles.is_empty()
            || self.rows.is_some()
            || self.columns.is_some()
            || self.padding.is_some()
            || self.output_dir.is_some()
            || self.format.is_some()
    }

    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if !self.has_changes() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see `tileprint config set --help`)",
            ));
        }

        let mut config = load_config(config_path)?;
        self.tiles.apply(&mut config)?;

        if let Some(rows) = self.rows {
            config.grid.rows = clamp_grid_dimension(rows);
        }
        if let Some(columns) = self.columns {
            config.grid.columns = clamp_grid_dimension(columns);
        }
        if let Some(padding) = self.padding {
            config.grid.padding_mm = clamp_padding(padding);
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory.clone_from(dir);
        }
        if let Some(format) = &self.format {
            config.output.format =
                OutputFormat::parse(format).map_err(|e| CliError::validation(e.to_string()))?;
        }

        let path = save(&config, config_path)?;
        println!("✓ Configuration saved to {}", path.display());
        Ok(())
    }
}

fn target_path(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(p) => Ok(p.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e}"))),
    }
}

fn save(config: &Config, config_path: Option<&Path>) -> CliResult<PathBuf> {
    let path = target_path(config_path)?;
    config
        .save_to(&path)
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
    Ok(path)
}

fn output_human_readable(config: &Config) {
    println!("Tiles");
    println!("  Spares per letter: {}", config.tiles.spares);
    println!(
        "  Tile size:         {} mm",
        crate::output::format_mm(config.tiles.tile_size_mm)
    );
    println!();
    println!("Grid");
    println!(
        "  Rows x columns:    {} x {}",
        config.grid.rows, config.grid.columns
    );
    println!(
        "  Padding:           {} mm",
        crate::output::format_mm(config.grid.padding_mm)
    );
    println!();
    println!("Output");
    println!("  Directory:         {}", config.output.directory.display());
    println!("  Format:            {}", config.output.format.as_str());
    println!();
    println!("Letters ({} tiles before spares)", config.letters.total());
    let line: Vec<String> = config
        .letters
        .iter()
        .map(|(letter, count)| format!("{letter}={count}"))
        .collect();
    for chunk in line.chunks(9) {
        println!("  {}", chunk.join(" "));
    }
}
