//! Error type for the event system.
//!
//! The manager itself only fails in two ways: a bad constructor argument or
//! a removal that names something not registered. Everything else is a
//! fault raised by caller-supplied code (a handler callable or a condition)
//! and is passed through untouched in [`Error::Fault`].

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by conditions, handlers and the event manager.
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor received an argument outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The event name has no registered handlers.
    #[error("'{event}' event does not exist")]
    EventNotFound { event: String },

    /// The event exists but none of its handlers equals the given one.
    #[error("{handler} is not found among registered event handlers for '{event}' event")]
    HandlerNotFound { event: String, handler: String },

    /// Fault raised by a caller-supplied callable or condition.
    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this is one of the two "not found" errors raised by removal.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound { .. } | Self::HandlerNotFound { .. })
    }

    /// Get the wrapped fault, if this error came from caller-supplied code.
    #[must_use]
    pub fn as_fault(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Fault(err) => Some(err),
            _ => None,
        }
    }
}
