//! Sinks and pseudo sink search tracking
//!
//! Sinks are owned by the discovery service; this module only names them and
//! follows a user-initiated search from a pseudo sink to the real sink it
//! resolves to.
//!
//! ```text
//!   receive_sink_response("cast:42")
//!                │
//!   ┌────────────▼────────────┐  "cast:42" in sink list  ┌─────────┐
//!   │ Searching               │ ───────────────────────► │ Found   │
//!   │ reports pseudo sink id  │                          │ latched │
//!   └─────────────────────────┘                          └─────────┘
//! ```

pub mod search;
pub mod types;

pub use search::{SearchPhase, SinkSearchTracker};
pub use types::{Sink, SinkId};
