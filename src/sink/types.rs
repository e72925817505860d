//! Sink identity types
//!
//! A sink is a discoverable cast or display target as reported by the
//! discovery service.

use std::sync::Arc;

/// Identifier for a sink
///
/// Uses `Arc<str>` internally so identifiers can be cloned freely between
/// sink lists and search trackers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SinkId(Arc<str>);

impl SinkId {
    /// Create a new sink ID
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the ID is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SinkId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SinkId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for SinkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A discoverable sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    /// Sink identifier
    pub id: SinkId,
    /// Display name
    pub name: String,
}

impl Sink {
    /// Create a new sink
    pub fn new(id: impl Into<SinkId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
