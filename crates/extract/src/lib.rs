mod consts;
pub mod date;
pub mod dom;
pub mod error;
mod extract;
pub mod models;

use time::OffsetDateTime;
use tracing::instrument;

use crate::error::Result;
pub use crate::extract::{ChapterList, Extractor, Fields, assemble};
use crate::models::Project;

/// Easy, top-level entrypoint for the extraction of a [`Project`] from the
/// HTML of a project page.
///
/// Relative release dates are resolved against `now`; pass the time the page
/// was fetched. See [`Extractor`] for more details.
#[instrument(skip(html, now), fields(html_size = html.len()))]
pub fn extract(html: &str, url: &str, now: OffsetDateTime) -> Result<Project> {
    Extractor::from_html(html).project(url, now)
}
