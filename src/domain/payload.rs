//! JSON bodies posted by the notifiers.
//!
//! Each payload is a flat object of string fields, serialized once and
//! dropped after the request.

use serde::{Deserialize, Serialize};

/// Telegram formatting mode used for every test message.
pub const PARSE_MODE_HTML: &str = "HTML";

/// Stadium background used as the default test photo.
pub const DEFAULT_PHOTO_URL: &str =
    "https://raw.githubusercontent.com/yassinnho7/livematch/main/public/assets/backgrounds/stadium_night.png";

/// Default caption for the photo test: a bold headline followed by the site link.
pub const DEFAULT_CAPTION: &str = "🚀 <b>تجربة بث مباشر ناجحة!</b>\n\nنظام الإشعارات الآلي يعمل الآن.\nرابط الموقع: https://livematch-991.pages.dev";

/// Marker text carried in the title of every webhook test post.
pub const WEBHOOK_TEST_MARKER: &str = "تجربة النشر المباشر";

/// Body of `sendPhoto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramPhoto {
    pub chat_id: String,
    pub photo: String,
    pub caption: String,
    pub parse_mode: String,
}

impl TelegramPhoto {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: DEFAULT_PHOTO_URL.to_string(),
            caption: DEFAULT_CAPTION.to_string(),
            parse_mode: PARSE_MODE_HTML.to_string(),
        }
    }

    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// Body of `sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
}

impl TelegramMessage {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: PARSE_MODE_HTML.to_string(),
        }
    }

    /// Connection-test message stamped with the send time.
    pub fn connection_test(chat_id: impl Into<String>, sent_at: chrono::DateTime<chrono::Utc>) -> Self {
        let text = format!(
            "🛠️ <b>Test Notification</b>\n\n\
             ✅ Telegram Bot is connected successfully!\n\
             🕒 Time: {}\n\n\
             If you see this message, the bot token and chat ID are correct.",
            sent_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        );
        Self::new(chat_id, text)
    }
}

/// Match announcement posted to the automation webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAnnouncement {
    pub id: String,
    pub title: String,
    pub league: String,
    pub time: String,
    pub link: String,
    pub message: String,
    pub photo: String,
}

impl WebhookAnnouncement {
    /// The synthetic announcement used to verify the webhook wiring.
    pub fn verification() -> Self {
        Self {
            id: "verify_test_001".to_string(),
            title: format!("🧪 {WEBHOOK_TEST_MARKER}"),
            league: "Test League".to_string(),
            time: "NOW".to_string(),
            link: "https://github.com/yassinnho7/livematch".to_string(),
            message: "🔥 هذا منشور تجريبي للتأكد من نظام النشر التلقائي!\n\nصورة الملعب الليلي: stadium_night.png 🏟️\nتم الارسال بنجاح عبر البرمجية.".to_string(),
            photo: "IMAGE_URL_HERE".to_string(),
        }
    }

    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }
}
