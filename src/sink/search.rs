//! Pseudo sink search tracking
//!
//! When a user starts a search from a placeholder ("pseudo") sink, the UI
//! shows a spinner on that entry. The search result names a real sink, which
//! may show up in the discovery list before or after the response arrives.
//! The tracker reports which identifier the spinner should be attached to:
//! the pseudo sink's until the real sink is actually visible, then the real
//! sink's for the rest of the search.

use super::types::{Sink, SinkId};

/// Phase of a pseudo sink search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Real sink not yet seen in the sink list
    Searching,
    /// Real sink has been seen; never reverts
    Found,
}

/// Tracks a search started from a pseudo sink
#[derive(Debug, Clone)]
pub struct SinkSearchTracker {
    /// The sink that started the search
    pseudo_sink: Sink,

    /// Real sink reported by the search response
    real_sink_id: Option<SinkId>,

    /// Real sink latched when it first appeared in the sink list
    found_sink_id: Option<SinkId>,
}

impl SinkSearchTracker {
    /// Create a tracker for a search started from `pseudo_sink`
    pub fn new(pseudo_sink: Sink) -> Self {
        Self {
            pseudo_sink,
            real_sink_id: None,
            found_sink_id: None,
        }
    }

    /// Record the sink ID returned by the search
    ///
    /// Later calls overwrite earlier ones. The phase is not re-evaluated, so
    /// once the search is `Found` the sink it was found with keeps being
    /// reported.
    pub fn receive_sink_response(&mut self, sink_id: impl Into<SinkId>) {
        let sink_id = sink_id.into();

        tracing::debug!(
            pseudo_sink = %self.pseudo_sink.id,
            sink = %sink_id,
            phase = ?self.phase(),
            "Sink search response received"
        );

        self.real_sink_id = Some(sink_id);
    }

    /// Get the ID the search should be attached to, given the current sinks
    ///
    /// Returns the real sink ID once it has appeared in `sinks`, otherwise
    /// the pseudo sink's ID.
    pub fn check_for_real_sink(&mut self, sinks: &[Sink]) -> &SinkId {
        if self.found_sink_id.is_none() {
            if let Some(real) = self.real_sink_id.as_ref().filter(|id| !id.is_empty()) {
                if sinks.iter().any(|sink| sink.id == *real) {
                    tracing::info!(
                        pseudo_sink = %self.pseudo_sink.id,
                        sink = %real,
                        "Real sink found for search"
                    );

                    self.found_sink_id = Some(real.clone());
                }
            }
        }

        self.found_sink_id.as_ref().unwrap_or(&self.pseudo_sink.id)
    }

    /// Get the pseudo sink that started the search
    pub fn pseudo_sink(&self) -> &Sink {
        &self.pseudo_sink
    }

    /// Get the most recent sink ID reported by the search, if any
    pub fn real_sink_id(&self) -> Option<&SinkId> {
        self.real_sink_id.as_ref()
    }

    /// Get the real sink the search was found with, if any
    pub fn found_sink_id(&self) -> Option<&SinkId> {
        self.found_sink_id.as_ref()
    }

    /// Get the current phase
    pub fn phase(&self) -> SearchPhase {
        if self.found_sink_id.is_some() {
            SearchPhase::Found
        } else {
            SearchPhase::Searching
        }
    }

    /// Check if the real sink has been seen
    pub fn is_found(&self) -> bool {
        self.found_sink_id.is_some()
    }
}
