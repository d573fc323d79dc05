//! Structured error types shared across lexo crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LexoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code, e.g. `cycle-detected`.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Diagnostic context such as `cycle`, `remaining`, `word_index` or `depth`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How the word list could be corrected, when known.
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

    /// Records a context entry, rendering the value with `ToString`.
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

/// Canonical error type for alphabet discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LexoError {
    /// The word list is not consistent with any total order.
    #[error("malformed input order: {0}")]
    Order(ErrorInfo),
    /// Internal bookkeeping went wrong; indicates a bug rather than bad input.
    #[error("invariant violation: {0}")]
    Invariant(ErrorInfo),
    /// Configuration parsing errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
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

impl LexoError {
    /// Builds an [`LexoError::Order`] error.
    pub fn order(code: impl Into<String>, message: impl Into<String>) -> Self {
        LexoError::Order(ErrorInfo::new(code, message))
    }

    /// Builds an [`LexoError::Invariant`] error.
    pub fn invariant(code: impl Into<String>, message: impl Into<String>) -> Self {
        LexoError::Invariant(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LexoError::Order(info)
            | LexoError::Invariant(info)
            | LexoError::Config(info)
            | LexoError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Sets a remediation hint, keeping the error family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    /// Returns true if the input word list contradicts every total order.
    pub fn is_malformed_order(&self) -> bool {
        matches!(self, LexoError::Order(_))
    }

    /// Returns true if internal bookkeeping was found inconsistent.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, LexoError::Invariant(_))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            LexoError::Order(info) => LexoError::Order(f(info)),
            LexoError::Invariant(info) => LexoError::Invariant(f(info)),
            LexoError::Config(info) => LexoError::Config(f(info)),
            LexoError::Serde(info) => LexoError::Serde(f(info)),
        }
    }
}
