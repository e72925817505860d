//! Media route identifiers and route request errors
//!
//! A route ID is the stable key for a route across the presentation,
//! provider, sink and source dimensions. Encoding and parsing are
//! independent: the two-UA form produced by `RouteId::build` is not
//! parseable.

pub mod error;
pub mod id;
pub mod source;

pub use error::{ResultCode, RouteIdParseError, RouteRequestError};
pub use id::{RouteId, ROUTE_ID_PREFIX};
pub use source::{PresentationUrlClassifier, SourceClassifier};
