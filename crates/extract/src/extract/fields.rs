use super::ChapterList;
use crate::consts;
use crate::dom::Node;
use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use scraper::Selector;
use tracing::instrument;

/// Page-level fields of a project page.
#[derive(Debug)]
pub struct Fields<N> {
    root: N,
}

/// Fields Internals
impl<N: Node> Fields<N> {
    pub(crate) fn new(root: N) -> Self {
        Self { root }
    }

    fn meta_content(&self, selector: &Selector) -> Option<String> {
        self.root
            .find_first(selector)
            .and_then(|meta| meta.attribute(consts::META_CONTENT_ATTR))
            .map(|content| content.trim().to_string())
    }

    fn link_texts(&self, selector: &Selector) -> Vec<String> {
        self.root
            .find_all(selector)
            .iter()
            .map(|anchor| anchor.text_content().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

/// Fields Public
impl<N: Node> Fields<N> {
    /// The chapter list container. A page without one is not a project page.
    #[instrument(level = "trace", skip(self))]
    pub fn chapter_list(&self) -> Result<ChapterList<N>> {
        self.root
            .find_first(&consts::CHAPTER_LIST_SELECTOR)
            .map(ChapterList::new)
            .ok_or_raise(|| ErrorKind::ChaptersNotFound)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn name(&self) -> Result<String> {
        self.meta_content(&consts::TITLE_META_SELECTOR)
            .filter(|name| !name.is_empty())
            .ok_or_raise(|| ErrorKind::ProjectNameNotFound)
    }

    /// The description may be empty, but the meta tag must exist.
    #[instrument(level = "trace", skip(self))]
    pub fn description(&self) -> Result<String> {
        self.meta_content(&consts::DESCRIPTION_META_SELECTOR).ok_or_raise(|| ErrorKind::DescriptionNotFound)
    }

    pub fn tags(&self) -> Vec<String> {
        self.link_texts(&consts::GENRE_LINK_SELECTOR)
    }

    pub fn authors(&self) -> Vec<String> {
        self.link_texts(&consts::AUTHOR_LINK_SELECTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn with_fields<T>(html: &str, f: impl FnOnce(Fields<scraper::ElementRef<'_>>) -> T) -> T {
        let document = Html::parse_document(html);
        f(Fields::new(document.root_element()))
    }

    #[test]
    fn test_meta_fields() {
        let html = r#"<html><head>
            <meta property="og:title" content=" The Lost Cinderella ">
            <meta property="og:description" content="">
        </head><body></body></html>"#;
        with_fields(html, |fields| {
            assert_eq!(fields.name().unwrap(), "The Lost Cinderella");
            assert_eq!(fields.description().unwrap(), "");
        });
    }

    #[test]
    fn test_missing_meta_fields() {
        let html = r#"<html><head><meta property="og:title" content="  "></head><body></body></html>"#;
        with_fields(html, |fields| {
            assert_eq!(&*fields.name().unwrap_err(), &ErrorKind::ProjectNameNotFound);
            assert_eq!(&*fields.description().unwrap_err(), &ErrorKind::DescriptionNotFound);
            assert_eq!(&*fields.chapter_list().unwrap_err(), &ErrorKind::ChaptersNotFound);
        });
    }

    #[test]
    fn test_link_lists() {
        let html = r#"<html><body>
            <div class="author-content"><a href="/a/1">Oh Ji-yeon</a> <a href="/a/2"> </a></div>
            <div class="genres-content"><a href="/g/1">Drama</a>, <a href="/g/2"> Romance </a>, <a href="/g/3">Fantasy</a></div>
        </body></html>"#;
        with_fields(html, |fields| {
            assert_eq!(fields.tags(), vec!["Drama", "Romance", "Fantasy"]);
            assert_eq!(fields.authors(), vec!["Oh Ji-yeon"]);
        });
    }

    #[test]
    fn test_missing_link_lists_are_empty() {
        with_fields("<html><body><p>nothing here</p></body></html>", |fields| {
            assert!(fields.tags().is_empty());
            assert!(fields.authors().is_empty());
        });
    }
}
