//! Automation webhook notifier.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use url::Url;

use crate::domain::{Delivery, DeliveryError, WebhookAnnouncement};
use crate::infrastructure::config::secret::mask_url;
use crate::port::outbound::notifier::{Notifier, Transport};

/// Posts one match announcement to an operator-supplied URL.
pub struct WebhookNotifier {
    transport: Arc<dyn Transport>,
    url: Url,
    announcement: WebhookAnnouncement,
}

impl WebhookNotifier {
    pub fn new(transport: Arc<dyn Transport>, url: Url, announcement: WebhookAnnouncement) -> Self {
        Self {
            transport,
            url,
            announcement,
        }
    }

    #[must_use]
    pub fn announcement(&self) -> &WebhookAnnouncement {
        &self.announcement
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &'static str {
        "webhook"
    }

    fn destination(&self) -> String {
        mask_url(self.url.as_str())
    }

    fn payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.announcement)
    }

    async fn send(&self) -> Result<Delivery, DeliveryError> {
        let body = self
            .payload()
            .map_err(|e| DeliveryError::Encode(e.to_string()))?;
        info!(id = %self.announcement.id, host = ?self.url.host_str(), "sending webhook test");
        self.transport.post_json(self.url.as_str(), &body).await
    }
}
