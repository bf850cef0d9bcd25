use std::fmt::{Display, Formatter, Result as FmtResult};
use time::OffsetDateTime;

/// A single entry of a project's chapter list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Name of the project this chapter belongs to, copied on creation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub project_name: String,
    /// Chapter title. The chapter list doesn't carry one, so this is always
    /// empty for now.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub name: String,
    /// Link to the chapter, as it appears in the markup (relative or absolute).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub url: String,
    /// Chapter ordinal, fractional for side chapters (`Chapter 12.5`).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_zero"))]
    pub number: f32,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub uploaded_at: OffsetDateTime,
}
impl Display for Chapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - Chapter {}", self.project_name, self.number)
    }
}

#[cfg(feature = "serde")]
fn is_zero(number: &f32) -> bool {
    *number == 0.0
}
