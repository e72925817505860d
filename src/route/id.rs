//! Media route identifiers
//!
//! A route ID encodes the presentation, provider, sink and media source of a
//! route in a single string key:
//!
//! ```text
//! urn:x-org.chromium:media:route:<presentation>/<provider>-<sink>/<source>
//! ```
//!
//! The presentation ID and source may be empty. Only the source may contain
//! further slashes. For two-UA presentations the route ID is the bare
//! presentation ID instead, which `RouteId::parse` deliberately rejects.

use std::str::FromStr;

use super::error::RouteIdParseError;
use super::source::SourceClassifier;

/// Prefix of every encoded route ID
pub const ROUTE_ID_PREFIX: &str = "urn:x-org.chromium:media:route:";

/// A parsed route ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId {
    /// Canonical string form
    route_id: String,
    /// Presentation ID (may be empty)
    presentation_id: String,
    /// Media route provider name
    provider_name: String,
    /// Sink ID
    sink_id: String,
    /// Media source, `None` when the source segment is empty
    source: Option<String>,
}

impl RouteId {
    /// Parse an encoded route ID
    ///
    /// Returns `None` for anything that is not a well-formed encoded route
    /// ID, including two-UA route IDs produced by [`RouteId::build`].
    pub fn parse(route_id: &str) -> Option<Self> {
        let parsed = split(route_id).map(|(presentation_id, provider_name, sink_id, source)| Self {
            route_id: route_id.to_string(),
            presentation_id: presentation_id.to_string(),
            provider_name: provider_name.to_string(),
            sink_id: sink_id.to_string(),
            source: (!source.is_empty()).then(|| source.to_string()),
        });

        if parsed.is_none() {
            tracing::trace!(route_id, "Not an encoded media route ID");
        }

        parsed
    }

    /// Build the route ID for a route
    ///
    /// If `source` is a presentation source according to `classifier`, the
    /// route ID is `presentation_id` itself (two-UA mode). The result then
    /// cannot be parsed back with [`RouteId::parse`]. Otherwise the encoded
    /// form is returned, with a `None` source encoded as an empty segment.
    pub fn build<C>(
        presentation_id: &str,
        provider_name: &str,
        sink_id: &str,
        source: Option<&str>,
        classifier: &C,
    ) -> String
    where
        C: SourceClassifier + ?Sized,
    {
        if let Some(source) = source {
            if classifier.is_presentation_source(source) {
                return presentation_id.to_string();
            }
        }

        format!(
            "{}{}/{}-{}/{}",
            ROUTE_ID_PREFIX,
            presentation_id,
            provider_name,
            sink_id,
            source.unwrap_or_default()
        )
    }

    /// Get the canonical string form
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Get the presentation ID
    pub fn presentation_id(&self) -> &str {
        &self.presentation_id
    }

    /// Get the provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Get the sink ID
    pub fn sink_id(&self) -> &str {
        &self.sink_id
    }

    /// Get the media source
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Split an encoded route ID into presentation, provider, sink and source
fn split(route_id: &str) -> Option<(&str, &str, &str, &str)> {
    let rest = route_id.strip_prefix(ROUTE_ID_PREFIX)?;

    let (presentation_id, rest) = rest.split_once('/')?;

    // Provider name ends at the first '-' and may not contain '/'
    let provider_end = rest.find(|c: char| c == '-' || c == '/')?;
    let (provider_name, rest) = rest.split_at(provider_end);
    let rest = rest.strip_prefix('-')?;
    if provider_name.is_empty() {
        return None;
    }

    let (sink_id, source) = rest.split_once('/')?;
    if sink_id.is_empty() {
        return None;
    }

    Some((presentation_id, provider_name, sink_id, source))
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.route_id)
    }
}

impl FromStr for RouteId {
    type Err = RouteIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteId::parse(s).ok_or_else(|| RouteIdParseError::new(s))
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.route_id
    }
}
