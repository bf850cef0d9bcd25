//! In-memory document provider for testing.

use super::{DocumentProvider, Page};
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory document provider for testing.
///
/// Serves pre-registered bodies; any other URL fails with
/// [`ErrorKind::FetchFailed`], like an unreachable page would.
///
/// # Examples
///
/// Requires the `mock` feature.
///
/// ```ignore
/// use manhwa_crawl::DocumentProvider;
/// use manhwa_crawl::provider::MockProvider;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let provider = MockProvider::with_pages([
///     ("https://manhwaclan.com/manga/one/", "<html>...</html>"),
/// ]);
/// assert!(provider.fetch("https://manhwaclan.com/manga/one/").await.is_ok());
/// assert!(provider.fetch("https://manhwaclan.com/manga/two/").await.is_err());
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockProvider {
    pages: HashMap<String, String>,
}
impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider pre-populated with `(url, body)` pairs.
    pub fn with_pages<I, U, B>(pages: I) -> Self
    where
        I: IntoIterator<Item = (U, B)>,
        U: Into<String>,
        B: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|(url, body)| (url.into(), body.into())).collect(),
        }
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }
}

#[async_trait]
impl DocumentProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, url: &str) -> Result<Page> {
        match self.pages.get(url) {
            Some(body) => Ok(Page::new(url, body.as_str())),
            None => exn::bail!(ErrorKind::FetchFailed { url: url.to_string() }),
        }
    }
}
