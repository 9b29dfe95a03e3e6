//! Command-line interface definitions.
//!
//! Defines the CLI structure for the livematch toolkit using `clap`: the
//! script patcher, the notification checks and configuration inspection.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::config::settings::DEFAULT_CONFIG_FILE;

/// Live-match front-end operator toolkit
#[derive(Parser, Debug)]
#[command(name = "livematch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve against whether stdout is a terminal.
    #[must_use]
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite the front-end script with a patch plan
    #[command(subcommand)]
    Patch(PatchCommand),

    /// Send a test notification
    #[command(subcommand)]
    Notify(NotifyCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `livematch patch`.
#[derive(Subcommand, Debug)]
pub enum PatchCommand {
    /// Apply a plan to its target file
    Apply(PatchApplyArgs),
    /// List built-in plans
    List,
    /// Print a built-in plan as TOML
    Show(PatchShowArgs),
}

/// Arguments for `patch apply`.
#[derive(Args, Debug)]
pub struct PatchApplyArgs {
    /// Built-in plan name
    #[arg(long, default_value = "tma-v2-lines", conflicts_with = "plan_file")]
    pub plan: String,

    /// Load the plan from a TOML file instead
    #[arg(long)]
    pub plan_file: Option<PathBuf>,

    /// Target file (defaults to the plan's target)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when an anchor is not found
    #[arg(long)]
    pub strict: bool,

    /// Skip the overwrite confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `patch show`.
#[derive(Args, Debug)]
pub struct PatchShowArgs {
    /// Built-in plan name
    pub name: String,
}

/// Subcommands for `livematch notify`.
#[derive(Subcommand, Debug)]
pub enum NotifyCommand {
    /// Send a test photo through the Telegram Bot API (sendPhoto)
    Telegram(TelegramPhotoArgs),
    /// Send a connection-test text message (sendMessage)
    TelegramMessage(TelegramMessageArgs),
    /// Post a test match announcement to the webhook
    Webhook(WebhookArgs),
}

/// Arguments for `notify telegram`.
#[derive(Args, Debug)]
pub struct TelegramPhotoArgs {
    /// Chat id or @channel (overrides TELEGRAM_CHAT_ID)
    #[arg(long)]
    pub chat_id: Option<String>,

    /// Photo URL
    #[arg(long)]
    pub photo: Option<String>,

    /// Caption (HTML)
    #[arg(long)]
    pub caption: Option<String>,
}

/// Arguments for `notify telegram-message`.
#[derive(Args, Debug)]
pub struct TelegramMessageArgs {
    /// Chat id or @channel (overrides TELEGRAM_CHAT_ID)
    #[arg(long)]
    pub chat_id: Option<String>,

    /// Message text (HTML); defaults to a timestamped connection test
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for `notify webhook`.
#[derive(Args, Debug)]
pub struct WebhookArgs {
    /// Webhook URL (overrides WEBHOOK_URL)
    #[arg(long)]
    pub url: Option<String>,
}

/// Subcommands for `livematch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with secrets masked
    Show,
}
