use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockito::Matcher;
use serde_json::{json, Value};
use url::Url;

use super::{ReqwestTransport, TelegramNotifier, TelegramRequest, WebhookNotifier};
use crate::domain::{Delivery, DeliveryError, TelegramMessage, TelegramPhoto, WebhookAnnouncement};
use crate::infrastructure::config::http::HttpConfig;
use crate::infrastructure::config::telegram::TelegramCredentials;
use crate::port::outbound::notifier::{Notifier, Transport};

/// Records every request and answers with a canned result.
struct RecordingTransport {
    calls: Mutex<Vec<(String, Value)>>,
    reply: Result<Delivery, DeliveryError>,
}

impl RecordingTransport {
    fn replying(reply: Result<Delivery, DeliveryError>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Delivery, DeliveryError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.reply.clone()
    }
}

fn credentials() -> TelegramCredentials {
    TelegramCredentials {
        bot_token: "123456:SECRETSECRETSECRET".into(),
        chat_id: "123".into(),
    }
}

fn transport() -> Arc<ReqwestTransport> {
    Arc::new(ReqwestTransport::new(&HttpConfig::default()).unwrap())
}

#[tokio::test]
async fn telegram_photo_posts_once_to_send_photo() {
    let recorder = RecordingTransport::replying(Ok(Delivery::new(200, "{\"ok\":true}")));
    let notifier = TelegramNotifier::new(
        recorder.clone(),
        "https://api.telegram.org/",
        credentials(),
        TelegramRequest::Photo(TelegramPhoto::new("123")),
    );

    let delivery = notifier.send().await.unwrap();

    assert_eq!(delivery.status, 200);
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        "https://api.telegram.org/bot123456:SECRETSECRETSECRET/sendPhoto"
    );
    assert_eq!(calls[0].1["chat_id"], "123");
    assert_eq!(calls[0].1["parse_mode"], "HTML");
}

#[test]
fn telegram_destination_masks_token() {
    let notifier = TelegramNotifier::new(
        RecordingTransport::replying(Ok(Delivery::new(200, ""))),
        "https://api.telegram.org",
        credentials(),
        TelegramRequest::Message(TelegramMessage::new("123", "hi")),
    );
    let destination = notifier.destination();
    assert!(!destination.contains("SECRETSECRETSECRET"));
    assert!(destination.ends_with("/sendMessage"));
}

#[tokio::test]
async fn webhook_passes_transport_failure_through() {
    let recorder = RecordingTransport::replying(Err(DeliveryError::Network("refused".into())));
    let notifier = WebhookNotifier::new(
        recorder.clone(),
        Url::parse("https://hook.example/abc").unwrap(),
        WebhookAnnouncement::verification(),
    );

    let err = notifier.send().await.unwrap_err();

    assert_eq!(err.kind(), "network");
    assert_eq!(recorder.calls().len(), 1);
    assert_eq!(recorder.calls()[0].1["id"], "verify_test_001");
}

#[tokio::test]
async fn reqwest_transport_posts_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bot123456:SECRETSECRETSECRET/sendPhoto")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "chat_id": "123",
            "parse_mode": "HTML",
        })))
        .with_status(200)
        .with_body("{\"ok\":true,\"result\":{}}")
        .expect(1)
        .create_async()
        .await;

    let notifier = TelegramNotifier::new(
        transport(),
        server.url(),
        credentials(),
        TelegramRequest::Photo(TelegramPhoto::new("123")),
    );
    let delivery = notifier.send().await.unwrap();

    mock.assert_async().await;
    assert_eq!(delivery.status, 200);
    assert_eq!(delivery.body, "{\"ok\":true,\"result\":{}}");
}

#[tokio::test]
async fn reqwest_transport_maps_error_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .with_status(404)
        .with_body("no such hook")
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/hook", server.url())).unwrap();
    let notifier = WebhookNotifier::new(transport(), url, WebhookAnnouncement::verification());
    let err = notifier.send().await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err,
        DeliveryError::Status {
            status: 404,
            body: "no such hook".into()
        }
    );
}

#[tokio::test]
async fn reqwest_transport_reports_connection_refused_as_network() {
    let err = transport()
        .post_json("http://127.0.0.1:1/unreachable", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "network");
}
