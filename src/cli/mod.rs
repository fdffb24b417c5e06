//! CLI command handlers for tileprint.
//!
//! Each subcommand loads the configuration, applies per-invocation overrides,
//! and calls into the pure layout core.

pub mod board;
pub mod common;
pub mod config;
pub mod render;
pub mod summary;

// Re-export types used by main.rs and tests
pub use board::BoardArgs;
pub use common::{CliError, CliResult, ExitCode, TileOverrides};
pub use config::ConfigArgs;
pub use render::RenderArgs;
pub use summary::SummaryArgs;
