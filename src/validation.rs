//! Input validation helpers.
//!
//! Field checks that cannot be expressed through serde's type layer (enum
//! membership is handled there). Errors carry the failing field so clients
//! can render them inline.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// A single failed field check.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str) -> Self {
        Self::new(field, format!("{} must not be empty", field))
    }

    pub fn invalid_email(field: &str) -> Self {
        Self::new(field, "must be a valid email address")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collects every failed check for a request so the client sees all of them
/// at once instead of fixing fields one by one.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            let message = self
                .errors
                .iter()
                .map(ValidationError::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            Err(ApiError::Validation(message))
        }
    }
}

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field));
    }
}

/// Validate email format.
pub fn validate_email(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field));
        return;
    }

    if !EMAIL_RE.is_match(trimmed) {
        errors.add(ValidationError::invalid_email(field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        let mut errors = ValidationErrors::new();
        validate_required("   ", "title", &mut errors);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_required_accepts_content() {
        let mut errors = ValidationErrors::new();
        validate_required("Yeni Film", "title", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_formats() {
        let valid = ["info@zengafilm.com", "a.b+c@example.co"];
        let invalid = ["", "not-an-email", "a@b", "two words@example.com"];

        for value in valid {
            let mut errors = ValidationErrors::new();
            validate_email(value, "email", &mut errors);
            assert!(errors.is_empty(), "expected {} to be accepted", value);
        }
        for value in invalid {
            let mut errors = ValidationErrors::new();
            validate_email(value, "email", &mut errors);
            assert!(!errors.is_empty(), "expected {} to be rejected", value);
        }
    }

    #[test]
    fn test_errors_join_into_single_message() {
        let mut errors = ValidationErrors::new();
        validate_required("", "name", &mut errors);
        validate_email("nope", "email", &mut errors);

        let err = errors.into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("[name]"));
        assert!(message.contains("[email]"));
    }
}
