//! Structured error handling for the Trove statement store
//!
//! Only loading, saving and configuration can fail. Queries never return errors: an
//! unknown entity is an empty answer, and a dangling identifier is a programming error
//! that panics.

use std::path::Path;
use thiserror::Error;

/// Error type for statement store operations
#[derive(Error, Debug, Clone)]
pub enum TroveError {
    /// File access failures while loading or saving statements
    #[error("I/O error: {message}")]
    Io { message: String, path: Option<String>, kind: Option<String> },

    /// A statement line that does not carry three terms (strict loading only)
    #[error("Malformed statement at line {line}: {message}")]
    MalformedStatement { message: String, line: usize, content: Option<String> },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        setting: Option<String>,
        expected: Option<String>,
        actual: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TroveError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            TroveError::Io { .. } => "io",
            TroveError::MalformedStatement { .. } => "malformed_statement",
            TroveError::Configuration { .. } => "configuration",
            TroveError::Internal { .. } => "internal",
        }
    }

    /// Check if retrying with corrected input could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            TroveError::Io { .. } => true,
            TroveError::MalformedStatement { .. } => true,
            TroveError::Configuration { .. } => false,
            TroveError::Internal { .. } => false,
        }
    }

    /// Path the failing operation was working on, if known
    pub fn path(&self) -> Option<&str> {
        match self {
            TroveError::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias for store operations
pub type TroveResult<T> = Result<T, TroveError>;

impl TroveError {
    /// Create an I/O error bound to a path
    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: Some(path.as_ref().display().to_string()),
            kind: Some(format!("{:?}", err.kind())),
        }
    }

    /// Create a malformed statement error
    pub fn malformed_statement(line: usize, content: &str, message: impl Into<String>) -> Self {
        Self::MalformedStatement {
            message: message.into(),
            line,
            content: Some(content.trim().to_string()),
        }
    }

    /// Create a configuration error
    pub fn configuration(
        setting: &str,
        expected: &str,
        actual: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            setting: Some(setting.to_string()),
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        }
    }
}

impl From<std::io::Error> for TroveError {
    fn from(err: std::io::Error) -> Self {
        TroveError::Io { message: err.to_string(), path: None, kind: Some(format!("{:?}", err.kind())) }
    }
}

impl From<toml::de::Error> for TroveError {
    fn from(err: toml::de::Error) -> Self {
        TroveError::Configuration {
            message: format!("TOML parse error: {err}"),
            setting: None,
            expected: None,
            actual: None,
        }
    }
}

/// Convert from anyhow::Error to TroveError
impl From<anyhow::Error> for TroveError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            return TroveError::Io {
                message: format!("I/O operation failed: {io_err}"),
                path: None,
                kind: Some(format!("{:?}", io_err.kind())),
            };
        }

        TroveError::Internal { message: format!("Unhandled error: {err}") }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach the path an I/O error happened on
    fn with_path_context(self, path: impl AsRef<Path>) -> TroveResult<T>;

    /// Attach the setting a configuration error refers to
    fn with_setting_context(self, setting: &str) -> TroveResult<T>;
}

impl<T> ResultExt<T> for TroveResult<T> {
    fn with_path_context(self, path: impl AsRef<Path>) -> TroveResult<T> {
        self.map_err(|mut err| {
            if let TroveError::Io { path: p, .. } = &mut err {
                if p.is_none() {
                    *p = Some(path.as_ref().display().to_string());
                }
            }
            err
        })
    }

    fn with_setting_context(self, setting: &str) -> TroveResult<T> {
        self.map_err(|mut err| {
            if let TroveError::Configuration { setting: s, .. } = &mut err {
                *s = Some(setting.to_string());
            }
            err
        })
    }
}
