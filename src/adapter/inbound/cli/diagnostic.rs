//! Miette-based error diagnostics for CLI error presentation.
//!
//! TOML parse failures in the configuration or a plan file are rendered with
//! the offending source, a labeled span and a help line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error, PatchError};

/// TOML file error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(livematch::toml))]
pub struct TomlDiagnostic {
    /// Human-readable error message.
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl TomlDiagnostic {
    /// Build a diagnostic from a TOML error and the content it came from.
    #[must_use]
    pub fn from_toml(
        message: impl Into<String>,
        file_name: &str,
        content: String,
        err: &toml::de::Error,
    ) -> Self {
        let span = err
            .span()
            .map(|range| SourceSpan::from((range.start, range.end.saturating_sub(range.start))));
        Self {
            message: format!("{}: {}", message.into(), err.message()),
            src: NamedSource::new(file_name, content),
            span,
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Upgrade a TOML parse error to a diagnostic when the source is at hand.
///
/// Returns `None` for every other error kind.
#[must_use]
pub fn toml_diagnostic(err: &Error, file_name: &str, content: &str) -> Option<TomlDiagnostic> {
    match err {
        Error::Config(ConfigError::Parse(toml_err)) => Some(
            TomlDiagnostic::from_toml(
                "invalid configuration",
                file_name,
                content.to_string(),
                toml_err,
            )
            .with_help("see livematch.toml.example for the supported keys"),
        ),
        Error::Patch(PatchError::Parse(toml_err)) => Some(
            TomlDiagnostic::from_toml("invalid patch plan", file_name, content.to_string(), toml_err)
                .with_help("each [[edit]] needs kind = \"line\", \"splice\" or \"anchor\""),
        ),
        _ => None,
    }
}

/// Render a diagnostic to stderr with miette's graphical handler.
pub fn render(diagnostic: TomlDiagnostic) {
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
