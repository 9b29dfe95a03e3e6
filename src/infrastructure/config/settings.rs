//! Application configuration loading and validation.
//!
//! Configuration comes from an optional TOML file with environment variable
//! overrides for secrets (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`,
//! `WEBHOOK_URL`). A missing file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use livematch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("livematch.toml")?;
//!     config.logging.init(0);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::secret::{mask_token, mask_url};
use super::telegram::TelegramConfig;
use super::webhook::WebhookConfig;
use crate::error::{ConfigError, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "livematch.toml";

/// Patcher settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Override the target file of every plan.
    #[serde(default)]
    pub target: Option<PathBuf>,
    /// Treat missing anchors as errors instead of skipping them.
    #[serde(default)]
    pub strict: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Telegram Bot API settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Automation webhook settings.
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Patcher settings.
    #[serde(default)]
    pub patch: PatchConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults (plus
    /// environment overrides) when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::parse_toml("")
        }
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = env("TELEGRAM_BOT_TOKEN") {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = env("TELEGRAM_CHAT_ID") {
            self.telegram.chat_id = Some(chat_id);
        }
        if let Some(url) = env("WEBHOOK_URL").or_else(|| env("MAKE_WEBHOOK_URL")) {
            self.webhook.url = Some(url);
        }
    }

    /// Validate values that do not depend on the command being run.
    ///
    /// Secrets are checked later, by the command that needs them.
    fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Err(e) = Url::parse(&self.telegram.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Copy of the configuration with secrets masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.telegram.bot_token = config.telegram.bot_token.as_deref().map(mask_token);
        config.webhook.url = config.webhook.url.as_deref().map(mask_url);
        config
    }
}
