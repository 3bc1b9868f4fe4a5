//! Directory-variant employee record and its transfer shape.

use crate::model::validation::{
    check_email, check_text, null_as_empty, TextRule, ValidationErrors, ValidationResult, NAME_RULE,
};
use serde::{Deserialize, Serialize};

/// Store-assigned row identifier shared by both variants.
pub type EmployeeId = i64;

const DEPARTMENT_RULE: TextRule = TextRule {
    field: "department",
    label: "Department",
    min_chars: 2,
    max_chars: 30,
};

/// Persisted employee row.
///
/// `id` is `None` only before the record store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// External representation accepted and returned by the directory API.
///
/// Missing or `null` JSON text fields deserialize as empty text so that
/// validation can report them as required instead of failing at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
}

impl EmployeeDto {
    /// Builds a creation payload without an identifier.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Checks boundary rules and returns every field-level violation found.
    ///
    /// The `id` field is not checked; handlers ignore it on input.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::default();
        check_text(&mut errors, &NAME_RULE, &self.name);
        check_email(&mut errors, &self.email);
        check_text(&mut errors, &DEPARTMENT_RULE, &self.department);
        errors.into_result()
    }
}
