//! Helpers for operator-supplied secrets and endpoints.

use crate::error::ConfigError;

/// True when `value` is blank or an unedited template value such as
/// `YOUR_TELEGRAM_BOT_TOKEN_HERE`.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || value.starts_with("YOUR_")
        || value.ends_with("_HERE")
        || (value.starts_with('<') && value.ends_with('>'))
}

/// Return the value, or fail when it is unset or a placeholder.
pub fn require_value(field: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Err(ConfigError::MissingField { field }),
        Some(v) if is_placeholder(v) => Err(ConfigError::Placeholder {
            field,
            value: v.to_string(),
        }),
        Some(v) => Ok(v.to_string()),
    }
}

/// Shorten a token for display.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        // Too short to show both ends; reveal at most a quarter of it.
        let head: String = chars.iter().take((chars.len() / 4).min(3)).collect();
        format!("{head}...")
    }
}

/// Keep scheme and host, hide the path that usually carries the hook secret.
#[must_use]
pub fn mask_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{host}/…", url.scheme()),
            None => mask_token(raw),
        },
        Err(_) => mask_token(raw),
    }
}
