// SPDX-License-Identifier: MPL-2.0
//! Form validation schemas and the validation-error mapper.
//!
//! Each form submits its raw field values to a schema function; on failure
//! the resulting [`ValidationFailure`] carries the ordered list of per-field
//! violations. [`ValidationFailure::field_errors`] flattens that list into a
//! field-keyed map that drives inline error rendering - fields absent from
//! the map are presumed valid.
//!
//! Messages are Fluent i18n keys, resolved at render time like every other
//! user-facing string.

use std::collections::HashMap;

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path the message applies to (e.g. `email`).
    pub field: String,
    /// i18n key of the human-readable message.
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A failed validation attempt: an ordered collection of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Flattens the violations into a field -> message map for form display.
    ///
    /// When a field path appears more than once, the first message wins: the
    /// inline error slot shows the primary violation for the field.
    #[must_use]
    pub fn field_errors(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for violation in &self.violations {
            errors
                .entry(violation.field.clone())
                .or_insert_with(|| violation.message.clone());
        }
        errors
    }
}

fn failure_from(violations: Vec<Violation>) -> Result<(), ValidationFailure> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { violations })
    }
}

/// Minimal structural e-mail check: one `@`, non-empty local part, and a
/// domain with an interior dot.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !email.contains(char::is_whitespace)
}

fn check_email(violations: &mut Vec<Violation>, email: &str) {
    if email.trim().is_empty() {
        violations.push(Violation::new("email", "validation-email-required"));
    } else if !is_valid_email(email.trim()) {
        violations.push(Violation::new("email", "validation-email-invalid"));
    }
}

/// Sign-in schema: e-mail required and well-formed, password required.
pub fn sign_in(email: &str, password: &str) -> Result<(), ValidationFailure> {
    let mut violations = Vec::new();
    check_email(&mut violations, email);
    if password.is_empty() {
        violations.push(Violation::new("password", "validation-password-required"));
    }
    failure_from(violations)
}

/// Sign-up schema: name required, e-mail required and well-formed, password
/// of at least [`MIN_PASSWORD_LEN`] characters.
pub fn sign_up(name: &str, email: &str, password: &str) -> Result<(), ValidationFailure> {
    let mut violations = Vec::new();
    if name.trim().is_empty() {
        violations.push(Violation::new("name", "validation-name-required"));
    }
    check_email(&mut violations, email);
    if password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(Violation::new("password", "validation-password-min"));
    }
    failure_from(violations)
}

/// Password-recovery schema: e-mail required and well-formed.
pub fn forgot_password(email: &str) -> Result<(), ValidationFailure> {
    let mut violations = Vec::new();
    check_email(&mut violations, email);
    failure_from(violations)
}
