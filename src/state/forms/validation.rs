//! Pure field validation
//!
//! Validation never fails as an operation: it always produces a [`Validity`],
//! and rendering that result is someone else's job. Rules are evaluated in a
//! fixed order and the first violation wins.

use super::field::{FieldKind, FormField};

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_NAME_LENGTH: &str = "Name must be at least 2 characters long";

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(message) => Some(message),
        }
    }
}

/// Validate a field's current value against its metadata.
///
/// Checks run on the whitespace-trimmed value; the stored value is left
/// untouched. Order: required emptiness, then email shape, then the
/// name-length rule, short-circuiting on the first violation.
pub fn validate(field: &FormField) -> Validity {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        Validity::Invalid(MSG_REQUIRED.to_string())
    } else if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        Validity::Invalid(MSG_EMAIL.to_string())
    } else if field.name == "name" && !value.is_empty() && value.chars().count() < 2 {
        Validity::Invalid(MSG_NAME_LENGTH.to_string())
    } else {
        Validity::Valid
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: a local part, one
/// `@`, and a domain containing a dot with at least one character on each
/// side; no whitespace or second `@` anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
