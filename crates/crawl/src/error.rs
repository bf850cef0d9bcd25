//! Crawl Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use manhwa_extract::error::{Error as ExtractError, ErrorKind as ExtractErrorKind};

/// A crawl error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Every variant that concerns a page carries the URL that was requested, so
/// failures can be matched back to their input.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed.
    #[display("failed to build HTTP client")]
    Client,
    /// The page could not be fetched (network error, error status, bad body).
    #[display("URL - {url}: failed to fetch page")]
    FetchFailed {
        /// The requested URL.
        url: String,
    },
    /// The URL could not be parsed.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
    /// The URL's host is not in the list of allowed domains.
    #[display("URL - {_0}: domain is not allowed")]
    ForbiddenDomain(#[error(not(source))] String),
    /// The page was fetched but the project could not be extracted.
    #[display("URL - {url}: {kind}")]
    Extract {
        /// The requested URL.
        url: String,
        /// What went wrong during extraction.
        kind: ExtractErrorKind,
    },
}
impl ErrorKind {
    /// Convert an extraction error into a crawl error for `url`, preserving
    /// the extract crate's `Exn` frame (error tree) as a child in its own
    /// error tree.
    #[track_caller]
    pub fn extract(url: impl Into<String>, err: ExtractError) -> Error {
        let kind = (*err).clone();
        err.raise(ErrorKind::Extract { url: url.into(), kind })
    }

    /// The URL this error concerns, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { url } | Self::Extract { url, .. } => Some(url.as_str()),
            Self::InvalidUrl(url) | Self::ForbiddenDomain(url) => Some(url.as_str()),
            Self::Client => None,
        }
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}
