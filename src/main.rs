//! tileprint - printable letter tile sheets
//!
//! Generates millimetre-accurate SVG pages of letter tiles for word-tile board
//! games, and tiles board templates for printing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tileprint::cli::{BoardArgs, CliResult, ConfigArgs, ExitCode, RenderArgs, SummaryArgs};
use tileprint::constants::APP_BINARY_NAME;
use tileprint::logging;
use tracing::debug;

/// tileprint - printable letter tiles for word-tile board games
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render letter tile pages
    Render(RenderArgs),
    /// Show tile totals and pagination
    Summary(SummaryArgs),
    /// Tile a board template onto a printable page
    Board(BoardArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Command::Render(args) => args.execute(config_path),
        Command::Summary(args) => args.execute(config_path),
        Command::Board(args) => args.execute(config_path),
        Command::Config(args) => args.execute(config_path),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(?cli, "parsed arguments");

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.into());
}
