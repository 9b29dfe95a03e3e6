//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode and color control. Report lines that a caller may
//! parse (`Status Code: ...`, `Error: ...`) are never colored and are printed
//! even in quiet mode.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
    /// Emit ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Whether stdout is attached to a terminal.
#[must_use]
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    if config.color {
        println!("  {:<12} {}", label.dimmed(), value);
    } else {
        println!("  {label:<12} {value}");
    }
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    if config.color {
        println!("  {} {}", "✓".green(), message);
    } else {
        println!("  ✓ {message}");
    }
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    if config.color {
        println!("  {} {}", "⚠".yellow(), message);
    } else {
        println!("  ⚠ {message}");
    }
}

/// Print an error line on stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    if config.color {
        eprintln!("  {} {}", "×".red(), message);
    } else {
        eprintln!("  × {message}");
    }
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    if config.color {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {message}");
}

/// Print a hint.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    if config.color {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    } else {
        println!("  hint: {message}");
    }
}

/// Print an unstyled report line that scripts may rely on.
///
/// Printed in quiet mode too; skipped in JSON mode, where the command emits
/// its own result object.
pub fn report(line: &str) {
    if read_config().json {
        return;
    }
    println!("{line}");
}

/// Print a complete JSON document (result of a command).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Braille spinner animation frames (Astral-style).
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode, or when stdout is
/// not a terminal.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = read_config();
    if config.json || config.quiet || !stdout_is_terminal() {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner, clearing its line.
pub fn spinner_done(pb: &indicatif::ProgressBar) {
    pb.finish_and_clear();
}
