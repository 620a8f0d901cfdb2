use catalog_model::{FieldValue, Fields, ValidationIssue};

pub fn check(fields: &Fields<'_>) -> Option<ValidationIssue> {
    match fields.text("title") {
        FieldValue::Valid(title) if !is_blank(title) => None,
        _ => Some(ValidationIssue::TitleEmpty),
    }
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
