//! # media-route
//!
//! Coordination primitives for a media router's discovery and route
//! bookkeeping:
//!
//! - [`SinkSearchTracker`]: follows a search started from a placeholder sink
//!   until the real sink shows up in the sink list
//! - [`RouteId`]: encodes and parses the composite route key
//!   (presentation, provider, sink, source)
//! - [`BoundedQueue`]: fixed-capacity FIFO that drops the oldest item on
//!   overflow
//! - [`Throttle`]: invokes a callback at most once per interval, delivering
//!   the latest arguments on the trailing edge
//! - [`RecentLogLayer`]: keeps the last N `tracing` events in memory
//!
//! The primitives are independent of each other. Only [`Throttle`] needs a
//! Tokio runtime.
//!
//! ## Example
//!
//! ```rust,ignore
//! use media_route::{RouteId, PresentationUrlClassifier, Sink, SinkSearchTracker};
//!
//! let id = RouteId::build("pres1", "cast", "sink7", Some("cast:app"), &PresentationUrlClassifier);
//! let route = RouteId::parse(&id).unwrap();
//! assert_eq!(route.sink_id(), "sink7");
//!
//! let mut search = SinkSearchTracker::new(Sink::new("pseudo:1", "Searching..."));
//! search.receive_sink_response("cast:42");
//! let attached_to = search.check_for_real_sink(&current_sinks);
//! ```

pub mod error;
pub mod log;
pub mod queue;
pub mod route;
pub mod sink;
pub mod throttle;

pub use error::{Error, Result};
pub use log::{LogBuffer, LogBufferConfig, LogRecord, RecentLogLayer};
pub use queue::{BoundedQueue, QueueError};
pub use route::{
    PresentationUrlClassifier, ResultCode, RouteId, RouteIdParseError, RouteRequestError,
    SourceClassifier, ROUTE_ID_PREFIX,
};
pub use sink::{SearchPhase, Sink, SinkId, SinkSearchTracker};
pub use throttle::Throttle;
