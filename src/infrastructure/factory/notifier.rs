//! Notifier factory.
//!
//! Resolves credentials and endpoints from configuration and wires the
//! reqwest transport into the notifier adapters. Every check that can fail
//! runs here, before any request is made.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::notifier::{
    ReqwestTransport, TelegramNotifier, TelegramRequest, WebhookNotifier,
};
use crate::domain::WebhookAnnouncement;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::Transport;

/// Build the shared HTTP transport.
pub fn build_transport(config: &Config) -> Result<Arc<dyn Transport>> {
    let transport = ReqwestTransport::new(&config.http)?;
    Ok(Arc::new(transport))
}

/// Build a Telegram notifier.
///
/// `make_request` receives the resolved chat id so payloads always target
/// the validated chat.
pub fn build_telegram_notifier<F>(
    config: &Config,
    chat_override: Option<&str>,
    make_request: F,
) -> Result<TelegramNotifier>
where
    F: FnOnce(&str) -> TelegramRequest,
{
    let credentials = config.telegram.credentials(chat_override)?;
    let request = make_request(&credentials.chat_id);
    debug!(
        method = request.method(),
        token = %credentials.masked_token(),
        "telegram notifier configured"
    );
    let transport = build_transport(config)?;
    Ok(TelegramNotifier::new(
        transport,
        config.telegram.api_url.clone(),
        credentials,
        request,
    ))
}

/// Build a webhook notifier carrying the verification announcement.
pub fn build_webhook_notifier(config: &Config, url_override: Option<&str>) -> Result<WebhookNotifier> {
    let url = config.webhook.endpoint(url_override)?;
    let mut announcement = WebhookAnnouncement::verification();
    if let Some(photo) = &config.webhook.photo {
        announcement = announcement.with_photo(photo.clone());
    }
    let transport = build_transport(config)?;
    Ok(WebhookNotifier::new(transport, url, announcement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TelegramPhoto;
    use crate::error::{ConfigError, Error};
    use crate::port::outbound::notifier::Notifier;

    fn config(toml: &str) -> Config {
        Config::parse_toml_with_env(toml, |_| None).unwrap()
    }

    #[test]
    fn telegram_requires_credentials() {
        let result = build_telegram_notifier(&config(""), None, |chat| {
            TelegramRequest::Photo(TelegramPhoto::new(chat))
        });
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn telegram_request_uses_resolved_chat() {
        let notifier = build_telegram_notifier(
            &config("[telegram]\nbot_token = \"123456:abcdefghijklmnop\"\nchat_id = \"file\"\n"),
            Some("123"),
            |chat| TelegramRequest::Photo(TelegramPhoto::new(chat)),
        )
        .unwrap();
        assert_eq!(notifier.payload().unwrap()["chat_id"], "123");
    }

    #[test]
    fn webhook_placeholder_fails_fast() {
        let result = build_webhook_notifier(
            &config("[webhook]\nurl = \"YOUR_MAKE_WEBHOOK_URL_HERE\"\n"),
            None,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Placeholder { .. }))
        ));
    }

    #[test]
    fn webhook_photo_comes_from_config() {
        let notifier = build_webhook_notifier(
            &config("[webhook]\nurl = \"https://hook.example/x\"\nphoto = \"https://img.example/p.png\"\n"),
            None,
        )
        .unwrap();
        assert_eq!(notifier.announcement().photo, "https://img.example/p.png");
    }
}
