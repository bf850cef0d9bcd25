//! Chapter release date normalization.
//!
//! Chapter lists carry their release dates in one of two shapes:
//!
//! 1. Recently released chapters have a link whose `title` attribute says how
//!    long ago the chapter was released, e.g. `<a title="2 days ago">`.
//! 2. Everything else has the calendar date as text inside an `<i>` element,
//!    e.g. `<i>January 2, 2006</i>`.
//!
//! Relative labels are resolved against an explicit reference time, so the
//! same markup and the same reference always give the same timestamp.

use std::str::FromStr;

use exn::{OptionExt, ResultExt};
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};
use tracing::instrument;

use crate::consts;
use crate::dom::Node;
use crate::error::{DateError, DateErrorKind, DateResult};

/// Unit of a relative date label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}
impl TimeUnit {
    /// Length of `amount` units.
    pub fn duration(&self, amount: u32) -> Duration {
        let amount = i64::from(amount);
        match self {
            TimeUnit::Minute => Duration::minutes(amount),
            TimeUnit::Hour => Duration::hours(amount),
            TimeUnit::Day => Duration::days(amount),
        }
    }
}
impl FromStr for TimeUnit {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "minute" | "minutes" => Self::Minute,
            "hour" | "hours" => Self::Hour,
            "day" | "days" => Self::Day,
            _ => exn::bail!(DateErrorKind::UnknownTimeUnit(s.to_string())),
        })
    }
}

/// Normalizes the release date of a single chapter-list entry.
///
/// The relative link is looked for first, then the absolute text. Whichever
/// element exists decides the parser: a relative link with an empty or broken
/// `title` is an error, it does not fall back to the absolute text.
#[instrument(level = "trace", skip(entry))]
pub fn normalize<N: Node>(entry: &N, now: OffsetDateTime) -> DateResult<OffsetDateTime> {
    let fragment =
        entry.find_first(&consts::RELEASE_DATE_SELECTOR).ok_or_raise(|| DateErrorKind::NoDateNode)?;
    if let Some(link) = fragment.find_first(&consts::RELATIVE_DATE_SELECTOR) {
        let label = link.attribute(consts::RELATIVE_DATE_ATTR).unwrap_or_default();
        return parse_relative(&label, now);
    }
    if let Some(text) = fragment.find_first(&consts::ABSOLUTE_DATE_SELECTOR) {
        return parse_absolute(&text.text_content());
    }
    exn::bail!(DateErrorKind::NoDateNode);
}

/// Parses a label such as `5 hours ago` (the trailing `ago` is optional) into
/// the moment that long before `now`.
///
/// The amount and unit are checked before the trailing word, so `two days
/// before` is a bad number and `2 weeks later` a bad unit.
pub fn parse_relative(label: &str, now: OffsetDateTime) -> DateResult<OffsetDateTime> {
    let tokens: Vec<&str> = label.split_whitespace().collect();
    let (amount, unit, suffix) = match tokens.as_slice() {
        [amount, unit] => (*amount, *unit, None),
        [amount, unit, suffix] => (*amount, *unit, Some(*suffix)),
        _ => exn::bail!(DateErrorKind::MalformedRelativeDate(label.to_string())),
    };
    let amount = amount.parse::<u32>().or_raise(|| DateErrorKind::InvalidNumericToken(amount.to_string()))?;
    let unit: TimeUnit = unit.parse()?;
    if suffix.is_some_and(|suffix| suffix != "ago") {
        exn::bail!(DateErrorKind::MalformedRelativeDate(label.to_string()));
    }
    now.checked_sub(unit.duration(amount))
        .ok_or_raise(|| DateErrorKind::InvalidNumericToken(amount.to_string()))
}

/// Parses a calendar date such as `January 2, 2006` into midnight UTC of
/// that day.
pub fn parse_absolute(text: &str) -> DateResult<OffsetDateTime> {
    let layout = format_description!("[month repr:long] [day padding:none], [year]");
    let text = text.trim();
    let date = Date::parse(text, layout).or_raise(|| DateErrorKind::InvalidAbsoluteDate(text.to_string()))?;
    Ok(date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use scraper::{Html, Selector};
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-03-10 15:30:45 UTC);

    #[rstest]
    #[case("1 minute", Duration::minutes(1))]
    #[case("45 minutes ago", Duration::minutes(45))]
    #[case("1 hour ago", Duration::hours(1))]
    #[case("23 hours", Duration::hours(23))]
    #[case("1 day ago", Duration::days(1))]
    #[case("2 days ago", Duration::days(2))]
    #[case("0 days ago", Duration::ZERO)]
    #[case("  3   hours   ago ", Duration::hours(3))]
    fn test_relative(#[case] label: &str, #[case] ago: Duration) {
        assert_eq!(parse_relative(label, NOW).unwrap(), NOW - ago);
    }

    #[rstest]
    #[case("1 day ago really")]
    #[case("posted 2 days ago today")]
    #[case("2 days later")]
    #[case("2")]
    #[case("")]
    fn test_relative_malformed(#[case] label: &str) {
        let err = parse_relative(label, NOW).unwrap_err();
        assert!(matches!(&*err, DateErrorKind::MalformedRelativeDate(_)));
    }

    #[rstest]
    #[case("two days ago")]
    #[case("-1 days ago")]
    #[case("1.5 hours ago")]
    #[case("99999999999 days ago")]
    #[case("two days before")]
    #[case("x hours later")]
    fn test_relative_invalid_number(#[case] label: &str) {
        let err = parse_relative(label, NOW).unwrap_err();
        assert!(matches!(&*err, DateErrorKind::InvalidNumericToken(_)));
    }

    #[test]
    fn test_relative_overflow() {
        // Fits in a u32, but not in the calendar.
        let err = parse_relative("4000000000 days ago", NOW).unwrap_err();
        assert!(matches!(&*err, DateErrorKind::InvalidNumericToken(_)));
    }

    #[rstest]
    #[case("3 weeks ago", "weeks")]
    #[case("1 month ago", "month")]
    #[case("10 seconds", "seconds")]
    #[case("2 Days ago", "Days")]
    #[case("2 weeks later", "weeks")]
    #[case("5 years before", "years")]
    fn test_relative_unknown_unit(#[case] label: &str, #[case] unit: &str) {
        let err = parse_relative(label, NOW).unwrap_err();
        assert_eq!(&*err, &DateErrorKind::UnknownTimeUnit(unit.to_string()));
    }

    #[rstest]
    #[case("January 2, 2006", datetime!(2006-01-02 0:00 UTC))]
    #[case("March 15, 2024", datetime!(2024-03-15 0:00 UTC))]
    #[case("December 31, 1999", datetime!(1999-12-31 0:00 UTC))]
    #[case("\n  May 7, 2023\t", datetime!(2023-05-07 0:00 UTC))]
    fn test_absolute(#[case] text: &str, #[case] expected: OffsetDateTime) {
        assert_eq!(parse_absolute(text).unwrap(), expected);
    }

    #[rstest]
    #[case("2006-01-02")]
    #[case("Jan 2, 2006")]
    #[case("January 2 2006")]
    #[case("February 30, 2024")]
    #[case("2 days ago")]
    #[case("")]
    fn test_absolute_invalid(#[case] text: &str) {
        let err = parse_absolute(text).unwrap_err();
        assert!(matches!(&*err, DateErrorKind::InvalidAbsoluteDate(_)));
    }

    fn normalize_entry(entry: &str) -> DateResult<OffsetDateTime> {
        let html = Html::parse_fragment(&format!("<ul>{entry}</ul>"));
        let li = html.root_element().select(&Selector::parse("li").unwrap()).next().unwrap();
        normalize(&li, NOW)
    }

    #[test]
    fn test_normalize_relative_markup() {
        let result = normalize_entry(
            r#"<li><a href="/c-3/">Chapter 3</a>
                <span class="chapter-release-date"><a href="/c-3/" title="2 days ago"><img></a></span></li>"#,
        );
        assert_eq!(result.unwrap(), NOW - Duration::days(2));
    }

    #[test]
    fn test_normalize_absolute_markup() {
        let result = normalize_entry(
            r#"<li><a href="/c-1/">Chapter 1</a>
                <span class="chapter-release-date"><i>January 2, 2006</i></span></li>"#,
        );
        assert_eq!(result.unwrap(), datetime!(2006-01-02 0:00 UTC));
    }

    #[test]
    fn test_normalize_relative_does_not_fall_back() {
        let result = normalize_entry(
            r#"<li><a href="/c-2/">Chapter 2</a>
                <span class="chapter-release-date"><a href="/c-2/"></a><i>January 2, 2006</i></span></li>"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(&*err, DateErrorKind::MalformedRelativeDate(_)));
    }

    #[rstest]
    #[case(r#"<li><a href="/c-1/">Chapter 1</a></li>"#)]
    #[case(r#"<li><a href="/c-1/">Chapter 1</a><span class="chapter-release-date"></span></li>"#)]
    #[case(r#"<li><a href="/c-1/">Chapter 1</a><span class="chapter-release-date">Jan 2</span></li>"#)]
    fn test_normalize_no_date_node(#[case] entry: &str) {
        let err = normalize_entry(entry).unwrap_err();
        assert_eq!(&*err, &DateErrorKind::NoDateNode);
    }
}
