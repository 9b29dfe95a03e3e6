//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! - [`outbound::notifier::Notifier`] - one-shot test notifications
//! - [`outbound::notifier::Transport`] - JSON-over-HTTP exchange used by notifiers

pub mod outbound;
