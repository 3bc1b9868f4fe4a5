//! Boundary validation for external employee representations.
//!
//! # Responsibility
//! - Check required text, length bounds and email shape.
//! - Collect every field-level violation instead of failing fast.
//!
//! # Invariants
//! - At most one violation per field; blank input only reports "required",
//!   not an additional length violation.
//! - Email local parts are dot-separated atoms; domains are labels or an
//!   IPv4 literal. Non-ASCII letters are accepted in both.
//! - Violations keep the order in which fields were checked.
//! - Lengths are counted in chars, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMAIL_ATOM: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{0080}-\x{FFFF}-]+";
const DOMAIN_LABEL: &str =
    r"[A-Za-z0-9\x{0080}-\x{FFFF}](?:[A-Za-z0-9\x{0080}-\x{FFFF}-]{0,61}[A-Za-z0-9\x{0080}-\x{FFFF}])?";
const IPV4_LITERAL: &str = r"\[[0-9]{1,3}(?:\.[0-9]{1,3}){3}\]";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{EMAIL_ATOM}(?:\.{EMAIL_ATOM})*@(?:{DOMAIN_LABEL}(?:\.{DOMAIN_LABEL})*|{IPV4_LITERAL})$"
    ))
    .expect("valid email regex")
});

pub type ValidationResult = Result<(), ValidationErrors>;

/// Length-bounded required text field.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    /// Serialized field name.
    pub field: &'static str,
    /// Human-readable name used in messages.
    pub label: &'static str,
    pub min_chars: usize,
    pub max_chars: usize,
}

pub(crate) const NAME_RULE: TextRule = TextRule {
    field: "name",
    label: "Name",
    min_chars: 2,
    max_chars: 50,
};

/// One rejected field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Non-empty list of violations returned by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> ValidationResult {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect();
        write!(f, "validation failed: {}", messages.join("; "))
    }
}

impl Error for ValidationErrors {}

/// Deserializes a required text field, reading JSON `null` as empty text.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Checks a required, length-bounded text field.
pub fn check_text(errors: &mut ValidationErrors, rule: &TextRule, value: &str) {
    if value.trim().is_empty() {
        errors.push(rule.field, format!("{} is required", rule.label));
        return;
    }

    let len = value.chars().count();
    if len < rule.min_chars || len > rule.max_chars {
        errors.push(
            rule.field,
            format!(
                "{} must be between {} and {} characters",
                rule.label, rule.min_chars, rule.max_chars
            ),
        );
    }
}

/// Checks a required email field.
pub fn check_email(errors: &mut ValidationErrors, value: &str) {
    if value.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_email(value) {
        errors.push("email", "Invalid email format");
    }
}

/// Returns whether `value` has a `local@domain` email shape.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
