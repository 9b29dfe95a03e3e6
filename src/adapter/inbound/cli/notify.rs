//! Handlers for the `notify` command group.
//!
//! Each command sends exactly one request. A failed delivery is reported as
//! an `Error: ...` line and is not fatal; configuration problems are, and
//! they surface before anything is sent.

use serde_json::json;
use tracing::warn;

use crate::adapter::inbound::cli::command::{TelegramMessageArgs, TelegramPhotoArgs, WebhookArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::notifier::TelegramRequest;
use crate::domain::{Delivery, DeliveryError, TelegramMessage, TelegramPhoto};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::notifier as factory;
use crate::port::outbound::notifier::Notifier;

/// Execute `notify telegram`.
pub async fn execute_telegram(config: &Config, args: &TelegramPhotoArgs) -> Result<()> {
    let notifier = factory::build_telegram_notifier(config, args.chat_id.as_deref(), |chat| {
        let mut photo = TelegramPhoto::new(chat);
        if let Some(url) = &args.photo {
            photo = photo.with_photo(url.clone());
        }
        if let Some(caption) = &args.caption {
            photo = photo.with_caption(caption.clone());
        }
        TelegramRequest::Photo(photo)
    })?;
    send(&notifier, "notify.telegram").await
}

/// Execute `notify telegram-message`.
pub async fn execute_telegram_message(config: &Config, args: &TelegramMessageArgs) -> Result<()> {
    let notifier = factory::build_telegram_notifier(config, args.chat_id.as_deref(), |chat| {
        let message = match &args.text {
            Some(text) => TelegramMessage::new(chat, text.clone()),
            None => TelegramMessage::connection_test(chat, chrono::Utc::now()),
        };
        TelegramRequest::Message(message)
    })?;
    send(&notifier, "notify.telegram_message").await
}

/// Execute `notify webhook`.
pub async fn execute_webhook(config: &Config, args: &WebhookArgs) -> Result<()> {
    let notifier = factory::build_webhook_notifier(config, args.url.as_deref())?;
    send(&notifier, "notify.webhook").await
}

async fn send(notifier: &dyn Notifier, command: &str) -> Result<()> {
    let destination = notifier.destination();

    output::section("Notify");
    output::field("Backend", notifier.name());
    output::field("Destination", &destination);
    if output::verbosity() > 0 {
        output::field("Payload", notifier.payload()?);
    }

    let pb = output::spinner("Sending test notification...");
    let result = notifier.send().await;
    output::spinner_done(&pb);

    match result {
        Ok(delivery) => report_delivery(command, &destination, &delivery),
        Err(err) => report_failure(command, &destination, &err),
    }
    Ok(())
}

fn report_delivery(command: &str, destination: &str, delivery: &Delivery) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "destination": destination,
            "status": "sent",
            "response": delivery,
        }));
        return;
    }
    output::report(&format!("Status Code: {}", delivery.status));
    output::report(&format!("Response Body: {}", delivery.body));
}

fn report_failure(command: &str, destination: &str, err: &DeliveryError) {
    warn!(kind = err.kind(), error = %err, "test notification failed");
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "destination": destination,
            "status": "failed",
            "error": {
                "kind": err.kind(),
                "http_status": err.status(),
                "message": err.to_string(),
            },
        }));
        return;
    }
    output::report(&format!("Error: {err}"));
}
