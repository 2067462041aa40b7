//! Client-side field validation
//!
//! Every rule is evaluated on each call; a field reports at most one
//! message and the required check wins over format checks.

use super::data::{FormData, FormErrors};
use super::field::{FieldKind, FieldSpec};
use super::schema::FormSchema;
use regex::Regex;
use std::sync::LazyLock;

pub const INVALID_PHONE: &str = "Please enter a valid 10-digit mobile number";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Validate a form against its schema
pub fn validate(schema: &FormSchema, form: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();
    for spec in &schema.fields {
        let value = form.text(&spec.name);
        if let Some(message) = validate_field(spec, value) {
            errors.insert(&spec.name, message);
        }
    }
    errors
}

/// Check a single field, returning its error message if it fails
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<String> {
    if !spec.required || spec.kind == FieldKind::Flag {
        return None;
    }

    if value.trim().is_empty() {
        return Some(spec.required_error());
    }

    match spec.kind {
        FieldKind::Phone if !is_valid_phone(value) => Some(INVALID_PHONE.to_string()),
        FieldKind::Email if !is_valid_email(value) => Some(INVALID_EMAIL.to_string()),
        _ => None,
    }
}

/// Exactly ten digits once separators are stripped
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

/// `local@domain.tld` shaped, not a full RFC check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
