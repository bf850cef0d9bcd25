use crate::consts;
use crate::date;
use crate::dom::Node;
use crate::error::{DateErrorKind, ErrorKind, Result};
use crate::models::Chapter;
use exn::OptionExt;
use time::OffsetDateTime;
use tracing::instrument;

/// The entries of a project's chapter list, most recent first.
#[derive(Debug)]
pub struct ChapterList<N> {
    entries: Vec<N>,
}
impl<N: Node> ChapterList<N> {
    pub(crate) fn new(container: N) -> Self {
        Self {
            entries: container.find_all(&consts::CHAPTER_ENTRY_SELECTOR),
        }
    }

    /// Number of entries, whether or not they can be parsed.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Collects every entry into a [`Chapter`], in document order.
    ///
    /// All or nothing: the first entry that fails aborts the collection, and
    /// no chapters are returned.
    #[instrument(level = "trace", skip(self), fields(entries = self.entries.len()))]
    pub fn chapters(&self, project_name: &str, now: OffsetDateTime) -> Result<Vec<Chapter>> {
        self.entries.iter().map(|entry| chapter(entry, project_name, now)).collect()
    }

    /// Release time of the first (most recent) entry.
    #[instrument(level = "trace", skip(self))]
    pub fn last_updated_at(&self, now: OffsetDateTime) -> Result<OffsetDateTime> {
        let first = self
            .entries
            .first()
            .ok_or_raise(|| DateErrorKind::NoDateNode)
            .map_err(ErrorKind::chapter_date)?;
        date::normalize(first, now).map_err(ErrorKind::chapter_date)
    }
}

fn chapter<N: Node>(entry: &N, project_name: &str, now: OffsetDateTime) -> Result<Chapter> {
    let link = entry.find_first(&consts::CHAPTER_LINK_SELECTOR);
    let url = link.and_then(|link| link.attribute(consts::HREF_ATTR)).unwrap_or_default();
    let number = number(&link.map(|link| link.text_content()).unwrap_or_default())?;
    let uploaded_at = date::normalize(entry, now).map_err(ErrorKind::chapter_date)?;
    Ok(Chapter {
        project_name: project_name.to_string(),
        name: String::new(),
        url,
        number,
        uploaded_at,
    })
}

/// Chapter links read `Chapter N`; the number is the second word.
fn number(text: &str) -> Result<f32> {
    text.split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<f32>().ok())
        .filter(|number| number.is_finite() && *number >= 0.0)
        .ok_or_raise(|| ErrorKind::InvalidChapterNumberFormat(text.trim().to_string()))
}
