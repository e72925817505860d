//! Bounded FIFO queue
//!
//! A fixed-capacity queue that retains the newest items and drops the oldest
//! on overflow. Used for rolling windows such as the recent log buffer.

pub mod bounded;
pub mod error;

pub use bounded::BoundedQueue;
pub use error::QueueError;
