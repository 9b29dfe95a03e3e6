use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use livematch::error::{ConfigError, Error};
use livematch::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("livematch-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[http]
timeout_secs = 5
accept_invalid_certs = false

[telegram]
api_url = "http://127.0.0.1:9000"

[patch]
target = "build/tma-v2.js"
strict = true
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("config should load");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.http.timeout_secs, 5);
    assert!(!config.http.accept_invalid_certs);
    assert_eq!(config.telegram.api_url, "http://127.0.0.1:9000");
    assert_eq!(config.patch.target, Some(PathBuf::from("build/tma-v2.js")));
    assert!(config.patch.strict);
}

#[test]
fn config_rejects_zero_timeout() {
    let path = write_temp_config("[http]\ntimeout_secs = 0\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(config) => panic!(
            "Expected zero timeout to be rejected, got {}",
            config.http.timeout_secs
        ),
    }
}

#[test]
fn config_rejects_unknown_log_format() {
    let path = write_temp_config("[logging]\nformat = \"xml\"\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
    ));
}

#[test]
fn config_reports_parse_errors() {
    let path = write_temp_config("[http\ntimeout_secs = 5\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn missing_file_yields_defaults() {
    let mut path = std::env::temp_dir();
    path.push("livematch-config-test-does-not-exist.toml");
    let _ = fs::remove_file(&path);

    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.telegram.api_url, "https://api.telegram.org");
    assert!(config.patch.target.is_none());
}

#[test]
fn environment_overrides_file_secrets() {
    let toml = r#"
[telegram]
bot_token = "from-file"
chat_id = "@file"

[webhook]
url = "https://file.example/hook"
"#;
    let config = Config::parse_toml_with_env(toml, |key| match key {
        "TELEGRAM_BOT_TOKEN" => Some("123456:ABCDEFGHIJKLMNOP".to_string()),
        "MAKE_WEBHOOK_URL" => Some("https://env.example/hook".to_string()),
        _ => None,
    })
    .expect("config");

    assert_eq!(config.telegram.bot_token.as_deref(), Some("123456:ABCDEFGHIJKLMNOP"));
    assert_eq!(config.telegram.chat_id.as_deref(), Some("@file"));
    assert_eq!(config.webhook.url.as_deref(), Some("https://env.example/hook"));
}

#[test]
fn placeholder_secrets_fail_when_used() {
    let config = Config::parse_toml_with_env("", |key| match key {
        "TELEGRAM_BOT_TOKEN" => Some("YOUR_BOT_TOKEN_HERE".to_string()),
        "TELEGRAM_CHAT_ID" => Some("@livematch".to_string()),
        _ => None,
    })
    .expect("placeholders are accepted at load time");

    assert!(matches!(
        config.telegram.credentials(None),
        Err(ConfigError::Placeholder {
            field: "TELEGRAM_BOT_TOKEN",
            ..
        })
    ));
}

#[test]
fn redacted_config_hides_secrets() {
    let config = Config::parse_toml_with_env("", |key| match key {
        "TELEGRAM_BOT_TOKEN" => Some("123456:ABCDEFGHIJKLMNOP".to_string()),
        "WEBHOOK_URL" => Some("https://hook.example/secret/path".to_string()),
        _ => None,
    })
    .expect("config");

    let shown = config.redacted();
    assert_eq!(shown.telegram.bot_token.as_deref(), Some("123456:ABC...LMNOP"));
    let url = shown.webhook.url.expect("url kept");
    assert!(!url.contains("secret"));
    assert!(url.starts_with("https://hook.example"));
}
