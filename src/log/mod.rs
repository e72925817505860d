//! Recent log capture
//!
//! A bounded window of the most recent `tracing` events, kept in memory for
//! diagnostics and feedback reports.
//!
//! ```text
//!   tracing::info!(..)
//!          │
//!          ▼
//!   Registry ──► fmt layer ──► stderr
//!          │
//!          └───► RecentLogLayer ──► LogBuffer (BoundedQueue<LogRecord>)
//!                                        │
//!                                  snapshot() / drain()
//! ```

pub mod buffer;
pub mod config;
pub mod layer;

pub use buffer::{LogBuffer, LogRecord};
pub use config::LogBufferConfig;
pub use layer::RecentLogLayer;
