//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without
//! containing business logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`factory`] - Notifier construction from configuration

pub mod config;
pub mod factory;
