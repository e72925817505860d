//! Queue error types

/// Error type for bounded queue operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// A constructor argument was out of range
    InvalidArgument(&'static str),
    /// Dequeue was called on a queue with no elements
    EmptyQueue,
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
            QueueError::EmptyQueue => write!(f, "Queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
