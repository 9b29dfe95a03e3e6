//! Factory modules for building infrastructure components.
//!
//! - [`notifier`] - Telegram and webhook notifier construction

pub mod notifier;
