//! Email normalization and validation.
//!
//! The signup form accepts anything shaped like `local@domain.tld`:
//! at least one `@`, no whitespace in either segment, and at least one
//! `.` in the domain part. Input is trimmed and lowercased before the
//! shape check so the normalized form is what gets validated and stored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Trim and lowercase a raw email string.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize and validate a raw email address.
///
/// Returns the normalized (trimmed, lowercased) address, or
/// [`CoreError::Validation`] if the input is empty or does not match the
/// `local@domain.tld` shape.
pub fn normalize_and_validate(raw: &str) -> Result<String, CoreError> {
    let email = normalize(raw);

    if email.is_empty() {
        return Err(CoreError::Validation("Email is required".to_string()));
    }

    if !EMAIL_RE.is_match(&email) {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }

    Ok(email)
}
