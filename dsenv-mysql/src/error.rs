//! Why a candidate value did not yield a connection target.
//!
//! None of these are surfaced as failures: a rejected candidate simply means
//! the next variable is tried. They exist so the reason can be logged.

use thiserror::Error;

/// Result type for connection-string parsing.
pub type ParseResult<T> = Result<T, ParseRejection>;

/// Reasons a connection string is not applicable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRejection {
    /// The URL names another database.
    #[error("scheme '{0}' is not mysql")]
    SchemeMismatch(String),

    /// The URL has no host component.
    #[error("no host in connection string")]
    MissingHost,

    /// Strict parsing failed and the value has no credentials segment to repair.
    #[error("not a connection URL: {0}")]
    Malformed(String),

    /// Strict parsing failed again after re-encoding the credentials segment.
    #[error("still malformed after re-encoding credentials: {0}")]
    Unrecoverable(String),
}

impl ParseRejection {
    /// Create a malformed-value rejection.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an unrecoverable rejection.
    pub fn unrecoverable(msg: impl Into<String>) -> Self {
        Self::Unrecoverable(msg.into())
    }

    /// Whether the value looked like a URL for a different database, as
    /// opposed to not looking like a URL at all.
    pub fn is_foreign_scheme(&self) -> bool {
        matches!(self, Self::SchemeMismatch(_))
    }
}
