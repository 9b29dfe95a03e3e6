//! Telegram Bot API notifier.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::domain::{Delivery, DeliveryError, TelegramMessage, TelegramPhoto};
use crate::infrastructure::config::telegram::TelegramCredentials;
use crate::port::outbound::notifier::{Notifier, Transport};

/// Bot API method and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramRequest {
    Photo(TelegramPhoto),
    Message(TelegramMessage),
}

impl TelegramRequest {
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Photo(_) => "sendPhoto",
            Self::Message(_) => "sendMessage",
        }
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Photo(photo) => serde_json::to_value(photo),
            Self::Message(message) => serde_json::to_value(message),
        }
    }
}

/// Sends one Bot API request to `<api_url>/bot<token>/<method>`.
pub struct TelegramNotifier {
    transport: Arc<dyn Transport>,
    api_url: String,
    credentials: TelegramCredentials,
    request: TelegramRequest,
}

impl TelegramNotifier {
    pub fn new(
        transport: Arc<dyn Transport>,
        api_url: impl Into<String>,
        credentials: TelegramCredentials,
        request: TelegramRequest,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            credentials,
            request,
        }
    }

    fn url_with_token(&self, token: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            token,
            self.request.method()
        )
    }

    /// Full endpoint URL, including the bot token.
    #[must_use]
    pub fn url(&self) -> String {
        self.url_with_token(&self.credentials.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn destination(&self) -> String {
        self.url_with_token(&self.credentials.masked_token())
    }

    fn payload(&self) -> Result<Value, serde_json::Error> {
        self.request.to_value()
    }

    async fn send(&self) -> Result<Delivery, DeliveryError> {
        let body = self
            .payload()
            .map_err(|e| DeliveryError::Encode(e.to_string()))?;
        info!(
            method = self.request.method(),
            chat_id = %self.credentials.chat_id,
            "sending telegram test"
        );
        self.transport.post_json(&self.url(), &body).await
    }
}
