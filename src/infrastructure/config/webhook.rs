//! Automation webhook configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use super::secret::require_value;
use crate::error::ConfigError;

/// Webhook notifier configuration.
///
/// `WEBHOOK_URL` (or the legacy `MAKE_WEBHOOK_URL`) overrides `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
    /// Photo URL sent with the verification post.
    #[serde(default)]
    pub photo: Option<String>,
}

impl WebhookConfig {
    /// Resolve and validate the destination, preferring `url_override`.
    pub fn endpoint(&self, url_override: Option<&str>) -> Result<Url, ConfigError> {
        let raw = require_value("WEBHOOK_URL", url_override.or(self.url.as_deref()))?;
        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            field: "WEBHOOK_URL",
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidValue {
                field: "WEBHOOK_URL",
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}
