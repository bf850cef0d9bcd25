use super::Chapter;
use time::OffsetDateTime;

/// Metadata of a single project (series), as listed on its page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    /// Project title, taken from the page's `og:title`
    pub name: String,
    /// URL of the page the project was extracted from
    pub url: String,
    /// Genre tags (may be empty)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub tags: Vec<String>,
    /// Number of entries in the chapter list
    pub chapters_count: usize,
    /// Chapters, most recent first
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub chapters: Vec<Chapter>,
    /// Release time of the most recent chapter
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub last_updated_at: OffsetDateTime,
    /// Project synopsis, taken from the page's `og:description`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub description: String,
    /// Authors (may be empty)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub authors: Vec<String>,
}
impl Project {
    /// The most recently released chapter, if any were collected.
    pub fn latest_chapter(&self) -> Option<&Chapter> {
        self.chapters.first()
    }
}
