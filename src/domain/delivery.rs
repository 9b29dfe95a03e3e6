//! Outcome of a single notification request.

use serde::Serialize;
use thiserror::Error;

/// A response that came back with a success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Why a notification request failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl DeliveryError {
    /// Stable name of the failure category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Tls(_) => "tls",
            Self::Timeout => "timeout",
            Self::Status { .. } => "status",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Encode(_) => "encode",
        }
    }

    /// HTTP status, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code() {
        let err = DeliveryError::Status {
            status: 401,
            body: "{\"ok\":false}".into(),
        };
        assert_eq!(err.kind(), "status");
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "HTTP 401: {\"ok\":false}");
    }

    #[test]
    fn transport_errors_have_no_status() {
        assert_eq!(DeliveryError::Timeout.status(), None);
        assert_eq!(DeliveryError::Tls("bad cert".into()).kind(), "tls");
    }
}
