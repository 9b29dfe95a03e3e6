//! Notifier port for one-shot test notifications.
//!
//! A [`Notifier`] owns its destination and payload and sends exactly one
//! request per [`Notifier::send`]. The HTTP exchange itself sits behind
//! [`Transport`] so notifiers can be driven without a network.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Delivery, DeliveryError};

/// Posts a JSON body and reports the response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` as `application/json`.
    ///
    /// Statuses of 400 and above come back as [`DeliveryError::Status`].
    async fn post_json(&self, url: &str, body: &Value) -> Result<Delivery, DeliveryError>;
}

/// Sends one prepared notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Backend name ("telegram", "webhook").
    fn name(&self) -> &'static str;

    /// Destination safe to print (secrets masked).
    fn destination(&self) -> String;

    /// The JSON body that [`Notifier::send`] posts.
    fn payload(&self) -> Result<Value, serde_json::Error>;

    /// Send the notification once.
    async fn send(&self) -> Result<Delivery, DeliveryError>;
}
