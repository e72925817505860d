//! Error types
//!
//! Each module has its own error type; `Error` wraps them for callers that
//! combine several modules.

use crate::queue::QueueError;
use crate::route::{RouteIdParseError, RouteRequestError};

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounded queue error (invalid capacity, empty queue)
    Queue(QueueError),
    /// Route request failed
    RouteRequest(RouteRequestError),
    /// String is not an encoded route ID
    InvalidRouteId(RouteIdParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Queue(e) => write!(f, "{}", e),
            Error::RouteRequest(e) => write!(f, "{}", e),
            Error::InvalidRouteId(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Queue(e) => Some(e),
            Error::RouteRequest(e) => Some(e),
            Error::InvalidRouteId(e) => Some(e),
        }
    }
}

impl From<QueueError> for Error {
    fn from(e: QueueError) -> Self {
        Error::Queue(e)
    }
}

impl From<RouteRequestError> for Error {
    fn from(e: RouteRequestError) -> Self {
        Error::RouteRequest(e)
    }
}

impl From<RouteIdParseError> for Error {
    fn from(e: RouteIdParseError) -> Self {
        Error::InvalidRouteId(e)
    }
}
