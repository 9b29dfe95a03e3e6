//! Outbound adapters (driven side).

pub mod notifier;
