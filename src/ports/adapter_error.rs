//! Adapter failure type shared by every invoice port.
//!
//! Adapters wrap whatever their backing technology raised into one
//! `AdapterError`, keeping the original cause as the error source. The
//! service layer never inspects or recovers it.

use std::error::Error as StdError;
use std::fmt;

use crate::domain::foundation::ErrorCode;

/// Boxed cause carried by an [`AdapterError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Which port an adapter failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Persistence,
    Cache,
    Notification,
    Token,
}

impl AdapterKind {
    /// Returns the error code for failures of this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            AdapterKind::Persistence => ErrorCode::PersistenceError,
            AdapterKind::Cache => ErrorCode::CacheError,
            AdapterKind::Notification => ErrorCode::NotificationError,
            AdapterKind::Token => ErrorCode::TokenError,
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure raised by a port implementation.
#[derive(Debug, thiserror::Error)]
#[error("[{kind}] {message}")]
pub struct AdapterError {
    kind: AdapterKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl AdapterError {
    /// Creates an adapter error without an underlying cause.
    pub fn new(kind: AdapterKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an adapter error wrapping an underlying cause.
    pub fn with_source(
        kind: AdapterKind,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(AdapterKind::Persistence, message)
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(AdapterKind::Cache, message)
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::new(AdapterKind::Notification, message)
    }

    pub fn token(message: impl Into<String>) -> Self {
        Self::new(AdapterKind::Token, message)
    }

    pub fn kind(&self) -> AdapterKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
