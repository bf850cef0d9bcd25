use super::domain::is_allowed;
use super::{DocumentProvider, Page};
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use exn::ResultExt;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Fetches pages over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
}
impl HttpProvider {
    /// Every request is abandoned after `timeout`, covering connect, redirects
    /// and reading the body. Redirects are only followed to hosts in
    /// `allowed_domains` (all hosts when it is empty).
    pub fn new<S: AsRef<str>>(user_agent: &str, timeout: Duration, allowed_domains: &[S]) -> Result<Self> {
        let allowed = allowed_domains.iter().map(|domain| domain.as_ref().to_ascii_lowercase()).collect();
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect_policy(allowed))
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }
}

fn redirect_policy(allowed: Vec<String>) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if is_allowed(&allowed, attempt.url()) {
            attempt.follow()
        } else {
            let target = attempt.url().to_string();
            attempt.error(ErrorKind::ForbiddenDomain(target))
        }
    })
}

#[async_trait]
impl DocumentProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, url: &str) -> Result<Page> {
        let failed = || ErrorKind::FetchFailed { url: url.to_string() };
        let response = self.client.get(url).send().await.or_raise(failed)?;
        let response = response.error_for_status().or_raise(failed)?;
        let visited = response.url().to_string();
        let body = response.text().await.or_raise(failed)?;
        tracing::debug!(url, visited = %visited, body_size = body.len(), "Fetched page");
        Ok(Page::new(visited, body))
    }
}
