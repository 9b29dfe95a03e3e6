//! reqwest-backed [`Transport`].

use std::error::Error as StdError;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Delivery, DeliveryError};
use crate::infrastructure::config::http::HttpConfig;
use crate::port::outbound::notifier::Transport;

/// JSON-over-HTTPS transport built on a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client honoring the timeout and certificate settings.
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(concat!("livematch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Delivery, DeliveryError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DeliveryError::MalformedResponse(error_chain(&e.without_url())))?;

        debug!(status = status.as_u16(), bytes = text.len(), "response received");

        if status.is_client_error() || status.is_server_error() {
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(Delivery::new(status.as_u16(), text))
    }
}

/// Map a send failure onto a [`DeliveryError`] kind.
///
/// The URL is stripped first: Telegram URLs embed the bot token.
fn classify(err: reqwest::Error) -> DeliveryError {
    let err = err.without_url();
    if err.is_timeout() {
        return DeliveryError::Timeout;
    }
    let message = error_chain(&err);
    if looks_like_tls(&message) {
        DeliveryError::Tls(message)
    } else if err.is_decode() || err.is_body() {
        DeliveryError::MalformedResponse(message)
    } else {
        DeliveryError::Network(message)
    }
}

/// Join an error and its sources into one line.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn looks_like_tls(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    ["certificate", "tls", "handshake", "ssl"]
        .iter()
        .any(|needle| lower.contains(needle))
}
