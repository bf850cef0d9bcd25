//! Document provider trait and implementations.
//!
//! A provider turns a URL into the HTML of the page at that URL. Extraction
//! never performs I/O itself; everything it reads comes through here.

mod domain;
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use self::domain::DomainFilter;
pub use self::http::HttpProvider;
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockProvider;
use crate::error::Result;
use async_trait::async_trait;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The URL that was visited. May differ from the requested URL when the
    /// provider follows redirects.
    pub url: String,
    /// Page body.
    pub body: String,
}
impl Page {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Unified interface for fetching pages.
///
/// # Examples
///
/// ```
/// use manhwa_crawl::{DocumentProvider, Page, error::Result};
///
/// async fn body_length(provider: &dyn DocumentProvider, url: &str) -> Result<usize> {
///     let page: Page = provider.fetch(url).await?;
///     Ok(page.body.len())
/// }
/// ```
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Name of the provider, used for logging only.
    fn name(&self) -> &str;

    /// Fetch the page at `url`.
    ///
    /// Failures are reported as [`ErrorKind::FetchFailed`](crate::error::ErrorKind::FetchFailed)
    /// (or another [`ErrorKind`](crate::error::ErrorKind) carrying the URL).
    /// Nothing is retried.
    async fn fetch(&self, url: &str) -> Result<Page>;
}
