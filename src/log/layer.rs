//! `tracing` layer capturing recent events
//!
//! Install alongside the usual formatting layer to keep the last N events in
//! memory:
//!
//! ```rust,ignore
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let recent = RecentLogLayer::new(&LogBufferConfig::default())?;
//! let subscriber = tracing_subscriber::registry().with(recent.clone());
//! tracing::subscriber::set_global_default(subscriber)?;
//!
//! // Later, e.g. when building a feedback report
//! let records = recent.snapshot();
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::buffer::{LogBuffer, LogRecord};
use super::config::LogBufferConfig;
use crate::error::Result;

/// Layer feeding events into a shared [`LogBuffer`]
///
/// Clones share the same buffer, so one clone can be installed in the
/// subscriber while another is kept to read records back.
///
/// Level filtering is done by the buffer, per its [`LogBufferConfig`].
#[derive(Debug, Clone)]
pub struct RecentLogLayer {
    buffer: Arc<Mutex<LogBuffer>>,
}

impl RecentLogLayer {
    /// Create a layer with its own buffer
    pub fn new(config: &LogBufferConfig) -> Result<Self> {
        Ok(Self {
            buffer: Arc::new(Mutex::new(LogBuffer::new(config)?)),
        })
    }

    /// Copy of the captured records, oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().snapshot()
    }

    /// Remove and return the captured records, oldest first
    pub fn drain(&self) -> Vec<LogRecord> {
        self.lock().drain()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LogBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> Layer<S> for RecentLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: SystemTime::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        };

        // Dropped by the buffer when below its minimum level
        self.lock().record(record);
    }
}

/// Collects the message and remaining fields of an event
#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl RecordVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}
