//! Infrastructure configuration modules.

pub mod http;
pub mod logging;
pub mod secret;
pub mod settings;
pub mod telegram;
pub mod webhook;
