//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so that stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

/// Maps `-v` occurrences to a default filter directive.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Returns `false` if a
/// subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(5), "debug");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init(0);
        assert!(!init(0));
    }
}
