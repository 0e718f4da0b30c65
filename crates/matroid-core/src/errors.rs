//! Structured error types shared across the matroid crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MatroidError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (axiom names, sizes, offending elements).
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let rendered: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", rendered.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the matroid kernel.
///
/// Every variant is raised synchronously at the point of detection and
/// reflects invalid input; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MatroidError {
    /// The payload supplied at construction violates its declared axiom system.
    #[error("axiom violation: {0}")]
    AxiomViolation(ErrorInfo),
    /// A set argument is not contained in (or not disjoint from) the expected ground set.
    #[error("domain violation: {0}")]
    DomainViolation(ErrorInfo),
    /// A combinatorial precondition of the operation does not hold.
    #[error("precondition violation: {0}")]
    PreconditionViolation(ErrorInfo),
    /// Encoded input has the wrong length or contains an unknown symbol.
    #[error("format violation: {0}")]
    FormatViolation(ErrorInfo),
    /// JSON or binary (de)serialization failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl MatroidError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MatroidError::AxiomViolation(info)
            | MatroidError::DomainViolation(info)
            | MatroidError::PreconditionViolation(info)
            | MatroidError::FormatViolation(info)
            | MatroidError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
