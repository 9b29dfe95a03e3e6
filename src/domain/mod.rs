//! Pure domain types: line sequences, patch plans, notification payloads.

pub mod delivery;
pub mod edit;
pub mod lines;
pub mod payload;

pub use delivery::{Delivery, DeliveryError};
pub use edit::{Edit, PatchPlan};
pub use lines::{LineSequence, OutOfRange};
pub use payload::{TelegramMessage, TelegramPhoto, WebhookAnnouncement};
