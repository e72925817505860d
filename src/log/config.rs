//! Recent log buffer configuration

use tracing::Level;

/// Configuration for the recent log buffer
#[derive(Debug, Clone)]
pub struct LogBufferConfig {
    /// Number of records retained (oldest dropped first)
    pub capacity: usize,

    /// Least severe level captured
    pub min_level: Level,
}

impl Default for LogBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            min_level: Level::DEBUG,
        }
    }
}

impl LogBufferConfig {
    /// Set the number of records retained
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the least severe level captured
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Check if events at `level` are captured
    pub fn captures(&self, level: &Level) -> bool {
        // `Level` orders TRACE as the greatest, so more severe is "less than"
        *level <= self.min_level
    }
}
