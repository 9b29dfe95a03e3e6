//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Level after applying `-v` flags: one raises to debug, two to trace.
    #[must_use]
    pub fn effective_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.level,
            1 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber on stderr.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self, verbose: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbose)));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        // A subscriber may already be installed (tests).
        let _ = result;
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.effective_level(0), "warn");
        assert_eq!(config.effective_level(1), "debug");
        assert_eq!(config.effective_level(3), "trace");
    }
}
