//! Callback throttling
//!
//! Limits a callback to one invocation per interval while always delivering
//! the most recent arguments on the trailing edge.

pub mod trailing;

pub use trailing::Throttle;
