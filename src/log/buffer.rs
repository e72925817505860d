//! Recent log records
//!
//! Keeps a rolling window of the most recent log records so they can be
//! attached to feedback reports without unbounded memory growth.

use std::time::SystemTime;

use tracing::Level;

use super::config::LogBufferConfig;
use crate::error::Result;
use crate::queue::BoundedQueue;

/// A captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// When the record was captured
    pub timestamp: SystemTime,
    /// Severity
    pub level: Level,
    /// Module path or explicit target of the event
    pub target: String,
    /// Formatted message
    pub message: String,
    /// Structured fields other than the message, in declaration order
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Create a record timestamped now
    pub fn new(level: Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            target: target.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Add a structured field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Look up a structured field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.level, self.target, self.message)?;
        for (name, value) in &self.fields {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}

/// Rolling window of recent log records
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: BoundedQueue<LogRecord>,
    config: LogBufferConfig,
}

impl LogBuffer {
    /// Create a log buffer
    ///
    /// Fails if `config.capacity` is zero.
    pub fn new(config: &LogBufferConfig) -> Result<Self> {
        Ok(Self {
            records: BoundedQueue::new(config.capacity)?,
            config: config.clone(),
        })
    }

    /// Add a record, dropping the oldest if the buffer is full
    ///
    /// Records less severe than the configured minimum level are ignored.
    /// Returns whether the record was kept.
    pub fn record(&mut self, record: LogRecord) -> bool {
        if !self.config.captures(&record.level) {
            return false;
        }
        self.records.enqueue(record);
        true
    }

    /// Copy of all records, oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records.values()
    }

    /// Remove and return all records, oldest first
    pub fn drain(&mut self) -> Vec<LogRecord> {
        self.records.dequeue_all()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are held
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records retained
    pub fn capacity(&self) -> usize {
        self.records.max_size()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
