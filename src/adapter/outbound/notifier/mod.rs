//! Notification adapters.
//!
//! Implements the `port::outbound::notifier` traits for the Telegram Bot API
//! and automation webhooks, over a reqwest transport.

pub mod http;
pub mod telegram;
pub mod webhook;

pub use http::ReqwestTransport;
pub use telegram::{TelegramNotifier, TelegramRequest};
pub use webhook::WebhookNotifier;

#[cfg(test)]
mod tests;
