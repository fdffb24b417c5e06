//! Board command: tile a board template onto a printable page.

use crate::cli::common::{load_config, resolve_output, CliError, CliResult};
use crate::config::{Config, OutputFormat};
use crate::output::{self, HtmlPrintSink, PageSink, SvgDirectorySink};
use crate::template::{render_board_page, BoardTemplate, TemplateLayout};
use clap::Args;
use std::path::{Path, PathBuf};

/// Cut a board template SVG into a 7x10 grid of printable squares
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Path to the board template SVG
    #[arg(short, long, value_name = "FILE")]
    pub template: PathBuf,

    /// Output file (defaults to board_[date].svg or .html in the output directory)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Output format: svg or html
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

impl BoardArgs {
    /// Execute the board command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let format = match &self.format {
            Some(f) => OutputFormat::parse(f).map_err(|e| CliError::validation(e.to_string()))?,
            None => config.output.format,
        };

        let template = BoardTemplate::load(&self.template).map_err(|e| match e {
            crate::template::TemplateError::Read { .. } => CliError::io(e.to_string()),
            crate::template::TemplateError::NotSvg => CliError::validation(e.to_string()),
        })?;

        let mut doc = render_board_page(&template, &TemplateLayout::default());
        let path = self.get_output_path(format, &config);

        let mut sink: Box<dyn PageSink> = match format {
            OutputFormat::Svg => {
                if let Some(stem) = path.file_stem() {
                    doc.name = stem.to_string_lossy().into_owned();
                }
                let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                Box::new(SvgDirectorySink::new(dir))
            }
            OutputFormat::Html => Box::new(HtmlPrintSink::new(&path, "Board elements")),
        };

        let written = output::write_all(sink.as_mut(), [&doc])
            .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;
        for path in &written {
            println!("✓ Wrote {}", path.display());
        }

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, format: OutputFormat, config: &Config) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let default = format!("board_{}.{}", date, format.as_str());
        resolve_output(self.out.as_ref(), config, &default)
    }
}
