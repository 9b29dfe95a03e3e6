//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod notify;
pub mod output;
pub mod patch;
