//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Date normalization has its own [`DateErrorKind`] so that it can be used on
//! its own; the chapter collector raises [`ErrorKind::ChapterDateParseFailed`]
//! on top of it, keeping the original frame as a child in the error tree.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A date normalization error with automatic location tracking.
pub type DateError = exn::Exn<DateErrorKind>;
/// Result type alias for date normalization.
pub type DateResult<T> = std::result::Result<T, DateError>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The page has no chapter list; it is probably not a project page.
    #[display("chapters not found")]
    ChaptersNotFound,
    /// The `og:title` meta tag is missing or blank.
    #[display("project name not found")]
    ProjectNameNotFound,
    /// The `og:description` meta tag is missing.
    #[display("description not found")]
    DescriptionNotFound,
    /// A chapter link text did not follow the `Chapter N` convention.
    #[display("invalid chapter number format, found value: {_0:?}")]
    InvalidChapterNumberFormat(#[error(not(source))] String),
    /// One of the chapter release dates could not be normalized.
    #[display("can't parse chapter date: {_0}")]
    ChapterDateParseFailed(DateErrorKind),
}

impl ErrorKind {
    /// Raise a chapter date failure on top of the date error, preserving the
    /// date error's frame as a child in the error tree.
    #[track_caller]
    pub fn chapter_date(err: DateError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::ChapterDateParseFailed(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The markup is either parseable or it isn't; fetching it again is the
        // caller's business.
        false
    }
}

/// Reasons a chapter release date could not be normalized.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum DateErrorKind {
    /// The relative label did not have the `N unit [ago]` shape.
    #[display("malformed relative date: {_0:?}")]
    MalformedRelativeDate(#[error(not(source))] String),
    /// The amount in a relative label is not a non-negative integer (or is
    /// too large to subtract from the reference time).
    #[display("invalid number in relative date: {_0:?}")]
    InvalidNumericToken(#[error(not(source))] String),
    /// The unit in a relative label is not minutes, hours or days.
    #[display("unknown time unit: {_0:?}")]
    UnknownTimeUnit(#[error(not(source))] String),
    /// The absolute date text does not match `Month D, YYYY`.
    #[display("invalid absolute date: {_0:?}")]
    InvalidAbsoluteDate(#[error(not(source))] String),
    /// Neither relative nor absolute date markup exists for the entry.
    #[display("no release date found")]
    NoDateNode,
}
