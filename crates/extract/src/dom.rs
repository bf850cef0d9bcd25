//! The small slice of a DOM tree that extraction needs.
//!
//! Everything in this crate is written against [`Node`] rather than a concrete
//! tree type: find descendants matching a selector, read an attribute, read
//! the text content. [`scraper::ElementRef`] is the implementation used in
//! practice.

use scraper::{ElementRef, Selector};

/// A queryable element in a parsed document.
pub trait Node: Copy {
    /// All descendants matching `selector`, in document order.
    fn find_all(&self, selector: &Selector) -> Vec<Self>;

    /// The first descendant matching `selector`, in document order.
    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    /// Value of the attribute `name`, if the element has it.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of the element and all its descendants.
    fn text_content(&self) -> String;
}

impl Node for ElementRef<'_> {
    fn find_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(ToString::to_string)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}
