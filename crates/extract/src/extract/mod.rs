//! Main extraction logic for manhwaclan project pages.

mod chapters;
mod fields;

use std::convert::Infallible;
use std::str::FromStr;

pub use self::chapters::ChapterList;
pub use self::fields::Fields;
use crate::dom::Node;
use crate::error::Result;
use crate::models::Project;
use scraper::{ElementRef, Html};
use time::OffsetDateTime;
use tracing::instrument;

#[derive(Debug)]
pub struct Extractor {
    document: Html,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// Returns `true` if the page has a chapter list, which is what every
    /// project page has and nothing else does.
    pub fn is_valid(&self) -> bool {
        self.fields().chapter_list().is_ok()
    }

    /// Extracts the project listed on the page.
    ///
    /// `url` is recorded as the project's source; `now` is the reference
    /// time that relative release dates ("2 days ago") are resolved against.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The page has no chapter list, project name or description
    /// - Any chapter's number or release date cannot be parsed
    #[instrument(skip(self, now))]
    pub fn project(&self, url: &str, now: OffsetDateTime) -> Result<Project> {
        assemble(&self.fields(), url, now)
    }

    pub fn fields(&self) -> Fields<ElementRef<'_>> {
        Fields::new(self.document.root_element())
    }
}
impl FromStr for Extractor {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<String> for Extractor {
    fn from(value: String) -> Self {
        Self::from_html(&value)
    }
}
impl From<Html> for Extractor {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}

/// Builds a [`Project`] from page fields, checking required fields in a fixed
/// order so that the same broken page always reports the same error.
pub fn assemble<N: Node>(fields: &Fields<N>, url: &str, now: OffsetDateTime) -> Result<Project> {
    let chapter_list = fields.chapter_list()?;
    let name = fields.name()?;
    let chapters = chapter_list.chapters(&name, now)?;
    let last_updated_at = chapter_list.last_updated_at(now)?;
    let chapters_count = chapter_list.count();
    let description = fields.description()?;
    Ok(Project {
        name,
        url: url.to_string(),
        tags: fields.tags(),
        chapters_count,
        chapters,
        last_updated_at,
        description,
        authors: fields.authors(),
    })
}
