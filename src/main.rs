mod cli;
mod error;
mod logging;

use std::io::{self, Write};
use std::pin::pin;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use exn::ResultExt;
use futures::StreamExt;
use manhwa_crawl::error::ErrorKind as CrawlErrorKind;
use manhwa_crawl::provider::{DomainFilter, HttpProvider};
use manhwa_crawl::{Crawler, ProviderHandle};
use manhwa_extract::models::Project;

use crate::cli::Cli;
use crate::error::{ErrorKind, Result};

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

/// Crawls every requested URL and returns how many of them failed.
async fn try_main() -> Result<usize> {
    let cli = Cli::parse();
    logging::init()?;
    tracing::debug!(?cli, "Parsed command line");

    let config = cli.config()?;
    let http = HttpProvider::new(&config.user_agent, config.timeout(), config.allowed_domains.as_slice())
        .or_raise(|| ErrorKind::Crawl)?;
    let provider: ProviderHandle = Arc::new(DomainFilter::new(Arc::new(http), config.allowed_domains.clone()));
    let crawler = Crawler::new(provider).with_workers(config.workers);

    let urls = cli.urls();
    let total = urls.len();
    tracing::info!(total, workers = crawler.workers(), "Starting crawl");

    let mut failed = 0;
    let mut results = pin!(crawler.crawl(urls));
    while let Some(result) = results.next().await {
        match result {
            Ok(project) => write_project(&mut io::stdout().lock(), &project)?,
            Err(err) => {
                failed += 1;
                let kind: &CrawlErrorKind = &err;
                tracing::error!(error = %kind, "Failed to collect project");
                tracing::debug!("{err:?}");
            },
        }
    }
    tracing::info!(total, failed, "Crawl finished");
    Ok(failed)
}

/// Writes `project` as a single line of JSON.
fn write_project(out: &mut impl Write, project: &Project) -> Result<()> {
    serde_json::to_writer(&mut *out, project).or_raise(|| ErrorKind::Output)?;
    writeln!(out).or_raise(|| ErrorKind::Output)?;
    out.flush().or_raise(|| ErrorKind::Output)
}
