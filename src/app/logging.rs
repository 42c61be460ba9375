//! Tracing subscriber initialization for the `gauge` binary.
//!
//! Priority (highest to lowest):
//!
//! 1. `GAUGE_LOG` env var (per-target directives, e.g. `econ_gauge=debug`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` -> debug, `-q` -> error)
//! 4. Default level: `warn`
//!
//! Logs always go to stderr so stdout stays clean for `--json` output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GAUGE_LOG";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are set.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            if let Ok(filter) = EnvFilter::try_new(&directives) {
                return filter;
            }
            eprintln!("warning: ignoring invalid {var}={directives}");
        }
    }
    EnvFilter::new(verbosity.default_level().as_str().to_ascii_lowercase())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
    }
}
