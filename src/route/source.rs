//! Media source classification
//!
//! Route IDs for presentation sources (Presentation API URLs) collapse to the
//! bare presentation ID. Whether a source counts as a presentation source is
//! decided by a `SourceClassifier`.

/// Decides whether a media source denotes a presentation
pub trait SourceClassifier {
    /// Check if `source` is a presentation source
    fn is_presentation_source(&self, source: &str) -> bool;
}

impl<F> SourceClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_presentation_source(&self, source: &str) -> bool {
        self(source)
    }
}

/// Classifies `http://` and `https://` URLs as presentation sources
///
/// Provider-specific sources such as `cast:<app-id>` or `dial:<app>` are not
/// presentation sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationUrlClassifier;

impl SourceClassifier for PresentationUrlClassifier {
    fn is_presentation_source(&self, source: &str) -> bool {
        let scheme = match source.split_once(':') {
            Some((scheme, _)) => scheme,
            None => return false,
        };
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    }
}
