//! HTTP client settings shared by the notifiers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    30
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (default: true, matching the
    /// manual test scripts this tool replaces).
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
}

impl HttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: default_true(),
        }
    }
}
