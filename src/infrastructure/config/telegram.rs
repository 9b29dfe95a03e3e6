//! Telegram Bot API configuration.

use serde::{Deserialize, Serialize};

use super::secret::{mask_token, require_value};
use crate::error::ConfigError;

/// Telegram notifier configuration.
///
/// `bot_token` and `chat_id` may be set in the file, but the
/// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` environment variables take
/// precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bot_token: None,
            chat_id: None,
        }
    }
}

/// Validated credentials for one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramCredentials {
    /// Token safe to print.
    #[must_use]
    pub fn masked_token(&self) -> String {
        mask_token(&self.bot_token)
    }
}

impl TelegramConfig {
    /// Resolve credentials, preferring `chat_override` for the chat id.
    ///
    /// Fails when either value is unset, blank or still a placeholder.
    pub fn credentials(&self, chat_override: Option<&str>) -> Result<TelegramCredentials, ConfigError> {
        let bot_token = require_value("TELEGRAM_BOT_TOKEN", self.bot_token.as_deref())?;
        let chat_id = require_value(
            "TELEGRAM_CHAT_ID",
            chat_override.or(self.chat_id.as_deref()),
        )?;
        Ok(TelegramCredentials { bot_token, chat_id })
    }
}
