//! Domain-filtered provider decorator.
//!
//! Wraps another provider and refuses to fetch anything whose host is not in
//! the allow-list.

use super::{DocumentProvider, Page};
use crate::ProviderHandle;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use exn::ResultExt;
use url::Url;

/// Domain-filtered document provider.
///
/// Hosts must match an allowed domain exactly (`www.example.com` is not
/// `example.com`). An empty allow-list lets everything through.
#[derive(Clone)]
pub struct DomainFilter {
    inner: ProviderHandle,
    allowed: Vec<String>,
}
impl DomainFilter {
    pub fn new<I, S>(inner: ProviderHandle, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = allowed.into_iter().map(|domain| domain.into().to_ascii_lowercase()).collect();
        Self { inner, allowed }
    }

    fn check(&self, url: &str) -> Result<()> {
        let parsed = Url::parse(url).or_raise(|| ErrorKind::InvalidUrl(url.to_string()))?;
        if !is_allowed(&self.allowed, &parsed) {
            exn::bail!(ErrorKind::ForbiddenDomain(url.to_string()));
        }
        Ok(())
    }
}

/// Whether `url`'s host is one of `allowed`, which must be lowercase. An empty
/// list allows every host.
pub(crate) fn is_allowed(allowed: &[String], url: &Url) -> bool {
    allowed.is_empty() || url.host_str().is_some_and(|host| allowed.iter().any(|domain| domain.as_str() == host))
}

#[async_trait]
impl DocumentProvider for DomainFilter {
    fn name(&self) -> &str {
        self.inner.name()
    }

    /// Both the requested URL and the URL the page was finally served from
    /// (after redirects) must be allowed. Errors carry the requested URL.
    async fn fetch(&self, url: &str) -> Result<Page> {
        self.check(url)?;
        let page = self.inner.fetch(url).await?;
        if self.check(&page.url).is_err() {
            tracing::warn!(url, visited = %page.url, "Redirected to a domain that is not allowed");
            exn::bail!(ErrorKind::ForbiddenDomain(url.to_string()));
        }
        Ok(page)
    }
}
