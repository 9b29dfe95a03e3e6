use thiserror::Error;

use crate::domain::delivery::DeliveryError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} is still a placeholder ({value}); set a real value before sending")]
    Placeholder { field: &'static str, value: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while applying a patch plan.
///
/// Any of these aborts the whole plan; the target file is never written
/// after a failed edit.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("edit #{edit}: line {index} is out of range ({len} lines)")]
    LineOutOfRange { edit: usize, index: usize, len: usize },

    #[error("edit #{edit}: range {start}..{end} is out of range ({len} lines)")]
    SpliceOutOfRange {
        edit: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("edit #{edit}: anchor not found: {anchor}")]
    AnchorNotFound { edit: usize, anchor: String },

    #[error("edit #{edit}: anchor matches {count} times, expected exactly one: {anchor}")]
    AmbiguousAnchor {
        edit: usize,
        anchor: String,
        count: usize,
    },

    #[error("unknown patch plan '{0}'")]
    UnknownPlan(String),

    #[error("invalid patch plan: {0}")]
    InvalidPlan(String),

    #[error("failed to parse patch plan: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
