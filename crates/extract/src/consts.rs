use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// Presence of the chapter list is what makes a page a project page.
selector!(CHAPTER_LIST_SELECTOR, "ul.version-chap");
selector!(CHAPTER_ENTRY_SELECTOR, "li");
// The chapter link comes before the release date span, which may hold a link of its own.
selector!(CHAPTER_LINK_SELECTOR, "a");
selector!(RELEASE_DATE_SELECTOR, "span.chapter-release-date");
// Recently released chapters: `<a title="2 days ago">` inside the release date span.
selector!(RELATIVE_DATE_SELECTOR, "a");
// Older chapters: `<i>January 2, 2006</i>` inside the release date span.
selector!(ABSOLUTE_DATE_SELECTOR, "i");
selector!(TITLE_META_SELECTOR, "meta[property='og:title']");
selector!(DESCRIPTION_META_SELECTOR, "meta[property='og:description']");
selector!(GENRE_LINK_SELECTOR, "div.genres-content a");
selector!(AUTHOR_LINK_SELECTOR, "div.author-content a");

pub(crate) const HREF_ATTR: &str = "href";
pub(crate) const META_CONTENT_ATTR: &str = "content";
pub(crate) const RELATIVE_DATE_ATTR: &str = "title";
