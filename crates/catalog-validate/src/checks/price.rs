use catalog_model::{FieldValue, Fields, ValidationIssue};

/// A non-numeric price is reported once; the sign check only runs on numbers.
pub fn check(fields: &Fields<'_>) -> Option<ValidationIssue> {
    match fields.number("price") {
        FieldValue::Valid(price) if price < 0.0 => Some(ValidationIssue::PriceNegative),
        FieldValue::Valid(_) => None,
        FieldValue::Absent | FieldValue::WrongType => Some(ValidationIssue::PriceNotNumber),
    }
}
