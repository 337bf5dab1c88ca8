//! Error types for the two-hop scrape pipeline.
//!
//! Every failure is one of three categories, matching the three places the
//! pipeline can go wrong:
//!
//! - [`ScrapeError::Fetch`]: a network hop failed (bad URL, non-2xx status,
//!   timeout, or transport error)
//! - [`ScrapeError::Selection`]: the listing page did not match the
//!   [`SelectionRule`](crate::SelectionRule)
//! - [`ScrapeError::Extraction`]: the detail page did not match the
//!   [`ExtractionRule`](crate::ExtractionRule)
//!
//! Errors are terminal for the call that produced them; the pipeline never
//! returns partial content alongside an error.

use std::fmt;

use thiserror::Error;

/// How a fetch went wrong.
///
/// Timeouts are a fetch failure rather than their own error category, so
/// callers that only care about "the network hop failed" can match on
/// [`ScrapeError::Fetch`] alone.
#[derive(Debug)]
pub enum FetchFailure {
    /// The URL could not be parsed.
    InvalidUrl(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request exceeded the configured deadline.
    Timeout,
    /// Transport-level failure: DNS, connect, TLS, or read.
    Transport(reqwest::Error),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            FetchFailure::Status(code) => write!(f, "HTTP status {code}"),
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

/// The error type for [`extract`](crate::extract) and
/// [`LedeScraper::extract`](crate::LedeScraper::extract).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A network hop failed. `url` is empty only when the HTTP client
    /// itself could not be constructed.
    #[error("fetching {url} failed: {failure}")]
    Fetch {
        /// The URL the request was issued against.
        url: String,
        /// What kind of fetch failure occurred.
        failure: FetchFailure,
    },

    /// The listing page structure did not match the selection rule.
    #[error("selecting an article on {url} failed: {reason}")]
    Selection {
        /// The listing page URL (after redirects).
        url: String,
        /// What part of the rule failed to match.
        reason: String,
    },

    /// The detail page structure did not match the extraction rule.
    #[error("extracting content from {url} failed: {reason}")]
    Extraction {
        /// The detail page URL (after redirects).
        url: String,
        /// What part of the rule failed to match.
        reason: String,
    },
}

impl ScrapeError {
    pub(crate) fn fetch(url: impl Into<String>, failure: FetchFailure) -> Self {
        ScrapeError::Fetch {
            url: url.into(),
            failure,
        }
    }

    pub(crate) fn selection(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ScrapeError::Selection {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn extraction(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ScrapeError::Extraction {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a fetch failure (including timeouts).
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. })
    }

    /// Returns true if this is a fetch failure caused by a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ScrapeError::Fetch {
                failure: FetchFailure::Timeout,
                ..
            }
        )
    }

    /// Returns true if this is a selection failure.
    pub fn is_selection(&self) -> bool {
        matches!(self, ScrapeError::Selection { .. })
    }

    /// Returns true if this is an extraction failure.
    pub fn is_extraction(&self) -> bool {
        matches!(self, ScrapeError::Extraction { .. })
    }

    /// The HTTP status code that caused a fetch failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Fetch {
                failure: FetchFailure::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }

    /// The URL the failure is attached to.
    pub fn url(&self) -> &str {
        match self {
            ScrapeError::Fetch { url, .. }
            | ScrapeError::Selection { url, .. }
            | ScrapeError::Extraction { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_display() {
        let err = ScrapeError::fetch("https://example.com/", FetchFailure::Status(404));
        assert_eq!(
            err.to_string(),
            "fetching https://example.com/ failed: HTTP status 404"
        );
        assert!(err.is_fetch());
        assert!(!err.is_timeout());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.url(), "https://example.com/");
    }

    #[test]
    fn test_timeout_is_also_fetch() {
        let err = ScrapeError::fetch("https://example.com/", FetchFailure::Timeout);
        assert!(err.is_fetch());
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_selection_display() {
        let err = ScrapeError::selection("https://example.com/world/", "no listing items matched `article`");
        assert_eq!(
            err.to_string(),
            "selecting an article on https://example.com/world/ failed: no listing items matched `article`"
        );
        assert!(err.is_selection());
        assert!(!err.is_extraction());
    }

    #[test]
    fn test_extraction_display() {
        let err = ScrapeError::extraction("https://example.com/a/1", "no content container matched `main`");
        assert!(err.is_extraction());
        assert_eq!(err.url(), "https://example.com/a/1");
    }
}
