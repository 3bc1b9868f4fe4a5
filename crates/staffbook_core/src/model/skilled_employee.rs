//! Skills-variant employee record with an owned skills sub-record.

use crate::model::employee::EmployeeId;
use crate::model::validation::{
    check_email, check_text, null_as_empty, ValidationErrors, ValidationResult, NAME_RULE,
};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a skills row.
pub type SkillsId = i64;

/// Skills sub-record owned by exactly one skilled employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skills {
    pub id: Option<SkillsId>,
    pub description: String,
}

/// Persisted skilled employee with its optional owned skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkilledEmployee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub skills: Option<Skills>,
}

/// External skills shape, serialized as `{"id": .., "skills": ".."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsDto {
    #[serde(default)]
    pub id: Option<SkillsId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: String,
}

/// External representation accepted and returned by the skills API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkilledEmployeeDto {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub skills: Option<SkillsDto>,
}

impl SkilledEmployeeDto {
    /// Builds a creation payload, optionally with a skills description.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        skills: Option<&str>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            skills: skills.map(|description| SkillsDto {
                id: None,
                skills: description.to_string(),
            }),
        }
    }

    /// Checks name and email; the skills description is free text.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::default();
        check_text(&mut errors, &NAME_RULE, &self.name);
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}
