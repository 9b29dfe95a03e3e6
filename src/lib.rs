//! Livematch - operator toolkit for the live-match front-end.
//!
//! Two independent jobs share this crate:
//!
//! - **Script patching** - rewrite `public/js/tma-v2.js` with a patch plan.
//!   Plans are either positional (line and splice edits against the
//!   unpatched file) or content-addressed (anchor edits that are safe to
//!   re-run).
//! - **Notification checks** - send exactly one test message through the
//!   Telegram Bot API or the automation webhook and report the response.
//!
//! # Architecture
//!
//! - [`domain`] - line sequences, edits, plans and notification payloads
//! - [`port`] - the `Notifier` and `Transport` traits
//! - [`application`] - the patcher and the built-in plan catalog
//! - [`adapter`] - the CLI (inbound) and reqwest-backed notifiers (outbound)
//! - [`infrastructure`] - configuration, logging and notifier construction
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```
//! use livematch::application::patcher::{apply_to_text, PatchOptions};
//! use livematch::domain::{Edit, PatchPlan};
//!
//! let plan = PatchPlan::new("demo", "demo.js").with_edit(Edit::line(1, "b = 2;"));
//! let (text, report) = apply_to_text(&plan, "a = 1;\nb = 0;\n", PatchOptions::default()).unwrap();
//! assert_eq!(text, "a = 1;\nb = 2;\n");
//! assert!(report.changed);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
