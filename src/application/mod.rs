//! Application services (use cases).
//!
//! - [`patcher`] - apply patch plans to text and files
//! - [`catalog`] - built-in plans for the mini-app script

pub mod catalog;
pub mod patcher;
