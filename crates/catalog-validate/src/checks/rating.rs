//! Rating checks.
//!
//! `rating` must be an object. The nested `rate` is only inspected when it is.

use catalog_model::{FieldValue, Fields, ValidationIssue};

/// Upper bound for `rating.rate`, inclusive.
pub const MAX_RATE: f64 = 5.0;

pub fn check(fields: &Fields<'_>) -> Option<ValidationIssue> {
    let FieldValue::Valid(rating) = fields.object("rating") else {
        return Some(ValidationIssue::RatingNotObject);
    };
    match rating.number("rate") {
        FieldValue::Valid(rate) if rate > MAX_RATE => Some(ValidationIssue::RateTooHigh),
        FieldValue::Valid(_) => None,
        FieldValue::Absent | FieldValue::WrongType => Some(ValidationIssue::RateNotNumber),
    }
}
