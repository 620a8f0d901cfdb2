//! Validation issue types.
//!
//! Each variant names one violated rule. The field path and message are derived
//! from the variant, so two issues for the same rule are always identical.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single rule violation tied to a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    /// `title` is missing, not text, or whitespace-only.
    TitleEmpty,
    /// `price` is missing or not numeric.
    PriceNotNumber,
    /// `price` is numeric but below zero.
    PriceNegative,
    /// `rating` is missing or not an object.
    RatingNotObject,
    /// `rating.rate` is missing or not numeric.
    RateNotNumber,
    /// `rating.rate` is numeric but above the maximum.
    RateTooHigh,
}

impl ValidationIssue {
    /// Dotted path of the offending field.
    pub fn field_path(&self) -> &'static str {
        match self {
            Self::TitleEmpty => "title",
            Self::PriceNotNumber | Self::PriceNegative => "price",
            Self::RatingNotObject => "rating",
            Self::RateNotNumber | Self::RateTooHigh => "rating.rate",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::TitleEmpty => "must be a non-empty string",
            Self::PriceNotNumber | Self::RateNotNumber => "must be a number",
            Self::PriceNegative => "must not be negative",
            Self::RatingNotObject => "must be an object with 'rate'",
            Self::RateTooHigh => "must not exceed 5",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path(), self.message())
    }
}

/// Issues joined as `field: message` pairs, in order.
pub fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Serialize)]
struct IssueRecord {
    field: &'static str,
    message: &'static str,
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IssueRecord {
            field: self.field_path(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
