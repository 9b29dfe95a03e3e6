//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config) -> Result<()> {
    let shown = config.redacted();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": serde_json::to_value(&shown)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults and environment overrides)");
    }

    output::section("Logging");
    output::field("Level", &shown.logging.level);
    output::field("Format", &shown.logging.format);

    output::section("HTTP");
    output::field("Timeout", format!("{}s", shown.http.timeout_secs));
    output::field("Verify TLS", !shown.http.accept_invalid_certs);

    output::section("Telegram");
    output::field("API", &shown.telegram.api_url);
    output::field("Bot token", display_optional(shown.telegram.bot_token.as_deref()));
    output::field("Chat ID", display_optional(shown.telegram.chat_id.as_deref()));

    output::section("Webhook");
    output::field("URL", display_optional(shown.webhook.url.as_deref()));

    output::section("Patch");
    output::field(
        "Target",
        shown
            .patch
            .target
            .as_ref()
            .map_or_else(|| "(plan default)".to_string(), |p| p.display().to_string()),
    );
    output::field("Strict", shown.patch.strict);
    Ok(())
}

fn display_optional(value: Option<&str>) -> &str {
    value.unwrap_or("(not set)")
}
