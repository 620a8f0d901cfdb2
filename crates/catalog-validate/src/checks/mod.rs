//! Validation check modules.
//!
//! Each module checks one top-level field and reports at most one issue per
//! field path.

mod price;
mod rating;
mod title;

use catalog_model::{ProductRecord, ValidationIssue};

/// Validate a single product, returning its issues in rule order.
///
/// Every check runs regardless of earlier failures. Malformed input never
/// panics; it only produces issues.
pub fn validate_product(record: &ProductRecord) -> Vec<ValidationIssue> {
    let fields = record.fields();
    let mut issues = Vec::new();

    // 1. title must be non-blank text
    issues.extend(title::check(&fields));

    // 2. price must be a non-negative number
    issues.extend(price::check(&fields));

    // 3. rating must be an object whose rate is at most 5
    issues.extend(rating::check(&fields));

    issues
}
