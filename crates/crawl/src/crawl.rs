use crate::ProviderHandle;
use crate::error::{Error, ErrorKind, Result};
use async_stream::stream;
use futures::stream::FuturesUnordered;
use futures::{Stream, StreamExt};
use manhwa_extract::models::Project;
use std::collections::VecDeque;
use std::pin::pin;
use time::OffsetDateTime;
use tracing::instrument;

/// Number of pages fetched at once unless told otherwise.
pub const DEFAULT_WORKERS: usize = 10;

/// Source of the reference time that relative release dates ("2 days ago")
/// are resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The time each page finished downloading, in the local offset when it
    /// can be determined, UTC otherwise.
    #[default]
    System,
    /// Always the same instant.
    Fixed(OffsetDateTime),
}
impl Clock {
    pub fn now(&self) -> OffsetDateTime {
        match self {
            Self::System => OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
            Self::Fixed(now) => *now,
        }
    }
}

/// Visits project pages and extracts a [`Project`] from each.
pub struct Crawler {
    provider: ProviderHandle,
    workers: usize,
    clock: Clock,
}
impl Crawler {
    pub fn new(provider: ProviderHandle) -> Self {
        Self {
            provider,
            workers: DEFAULT_WORKERS,
            clock: Clock::default(),
        }
    }

    /// Maximum number of pages in flight at once; at least one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Fetches a single project page and extracts the project from it.
    ///
    /// Errors carry `url`, whether fetching or extraction failed.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn visit(&self, url: &str) -> Result<Project> {
        tracing::info!("Visiting");
        let page = self.provider.fetch(url).await?;
        let project = manhwa_extract::extract(&page.body, &page.url, self.clock.now())
            .map_err(|err| ErrorKind::extract(url, err))?;
        tracing::debug!(name = %project.name, chapters = project.chapters_count, "Collected project");
        Ok(project)
    }

    async fn visit_owned(&self, url: String) -> Result<Project> {
        self.visit(&url).await
    }

    /// Streams the outcome of visiting every URL, in order of completion.
    ///
    /// At most [`workers`](Self::workers) pages are in flight at once;
    /// remaining URLs are started, first come first served, as in-flight
    /// ones complete. Every URL yields exactly one item: its project, or the
    /// error that stopped it. A failure never stops the other URLs, and the
    /// stream only ends once every URL has been dealt with.
    pub fn crawl<I, S>(&self, urls: I) -> impl Stream<Item = Result<Project>> + '_
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();
        // `rustfmt` does not format macros that use braces. Wrap in parentheses!
        stream!({
            let total = urls.len();
            let mut queue: VecDeque<_> = urls.into_iter().map(|url| self.visit_owned(url)).collect();
            let mut processing = FuturesUnordered::new();
            let initial = self.workers.min(queue.len());
            processing.extend(queue.drain(..initial));
            while let Some(result) = processing.next().await {
                yield result;
                if let Some(next) = queue.pop_front() {
                    processing.push(next);
                }
            }
            tracing::debug!(total, "Crawl complete");
        })
    }

    /// Visits every URL and sorts the outcomes into a [`Batch`].
    pub async fn run<I, S>(&self, urls: I) -> Batch
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Batch::collect(self.crawl(urls)).await
    }
}

/// Outcome of a crawl, split into extracted projects and errors.
///
/// A URL contributes to exactly one of the two lists.
#[derive(Default)]
pub struct Batch {
    pub projects: Vec<Project>,
    pub errors: Vec<Error>,
}
impl Batch {
    /// Drains `stream` to completion.
    pub async fn collect(stream: impl Stream<Item = Result<Project>>) -> Self {
        let mut batch = Self::default();
        let mut stream = pin!(stream);
        while let Some(result) = stream.next().await {
            batch.push(result);
        }
        batch
    }

    pub fn push(&mut self, result: Result<Project>) {
        match result {
            Ok(project) => self.projects.push(project),
            Err(err) => self.errors.push(err),
        }
    }

    /// Returns `true` if no URL failed.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
