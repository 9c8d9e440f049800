//! Structured error types shared across the benchmark crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LfsError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, indices, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the benchmark.
///
/// A search that does not find its query is not an error, and neither is a
/// verification disagreement: both are ordinary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LfsError {
    /// Caller supplied an argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem failures while writing artefacts.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Serialization failures (JSON, YAML, CSV).
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// A benchmark worker thread terminated abnormally.
    #[error("worker error: {0}")]
    Worker(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl LfsError {
    /// Shorthand for an [`LfsError::InvalidArgument`] with the given code and message.
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        LfsError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LfsError::InvalidArgument(info)
            | LfsError::Config(info)
            | LfsError::Io(info)
            | LfsError::Serde(info)
            | LfsError::Worker(info) => info,
        }
    }
}
