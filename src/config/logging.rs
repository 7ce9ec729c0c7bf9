//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library emits `tracing` events only; the binary installs the
//! subscriber. Output always goes to stderr so that `--json` keeps stdout
//! clean.
//!
//! # Log Levels
//!
//! - `warn`: degraded path resolution, unreadable config
//! - `info`: discovery outcome
//! - `debug`: every probed directory and candidate

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not consulted or not set
    pub level_filter: LevelFilter,

    /// Honor `RUST_LOG` when present
    pub use_env_filter: bool,

    /// Use ANSI colors
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0: warn, `RUST_LOG` honored
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level_filter = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level_filter,
            use_env_filter: verbosity == 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::default().add_directive(self.level_filter.into());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
        } else {
            fallback()
        }
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level_filter, LevelFilter::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level_filter, LevelFilter::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5).level_filter, LevelFilter::TRACE);
        assert!(!LogConfig::from_verbosity(1).use_env_filter);
    }

    #[test]
    fn test_explicit_level_ignores_env() {
        let config = LogConfig::from_verbosity(1);
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
