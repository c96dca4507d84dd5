//! Employee record model.
//!
//! # Responsibility
//! - Define the stored record and the caller-owned field set.
//! - Validate caller input before it reaches a repository.
//!
//! # Invariants
//! - `id` is assigned once by a repository and never changes.
//! - `name` and `position` are non-blank with at least 3 characters.
//! - `salary` is finite and non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned record identity.
///
/// Identities start at 1 and are never reused within one repository.
pub type EmployeeId = u64;

/// Minimum character count for textual fields.
pub const MIN_TEXT_FIELD_CHARS: usize = 3;

/// Stored employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

/// Caller-owned part of an employee record.
///
/// Used as the create/update payload; the repository supplies the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl EmployeeFields {
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: f64) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
        }
    }

    /// Checks field-level rules.
    ///
    /// # Errors
    /// - `MissingField` when a text field is empty or whitespace only.
    /// - `TooShort` when a text field has fewer than `MIN_TEXT_FIELD_CHARS` chars.
    /// - `NonFiniteSalary` / `NegativeSalary` for unusable salary values.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        validate_text_field("name", &self.name)?;
        validate_text_field("position", &self.position)?;

        if !self.salary.is_finite() {
            return Err(EmployeeValidationError::NonFiniteSalary);
        }
        if self.salary < 0.0 {
            return Err(EmployeeValidationError::NegativeSalary(self.salary));
        }

        Ok(())
    }
}

impl Employee {
    /// Builds a record from an assigned identity and caller fields.
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            salary: fields.salary,
        }
    }

    /// Returns a copy of the caller-owned fields.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            position: self.position.clone(),
            salary: self.salary,
        }
    }

    /// Replaces every caller-owned field, keeping `id`.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.position = fields.position;
        self.salary = fields.salary;
    }
}

/// Field validation failures for employee input.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    MissingField(&'static str),
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    NegativeSalary(f64),
    NonFiniteSalary,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::TooShort { field, min, actual } => write!(
                f,
                "{field} must be at least {min} characters (got {actual})"
            ),
            Self::NegativeSalary(value) => {
                write!(f, "salary must be no less than 0 (got {value})")
            }
            Self::NonFiniteSalary => write!(f, "salary must be a finite number"),
        }
    }
}

impl Error for EmployeeValidationError {}

fn validate_text_field(field: &'static str, value: &str) -> Result<(), EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(EmployeeValidationError::MissingField(field));
    }

    let actual = value.chars().count();
    if actual < MIN_TEXT_FIELD_CHARS {
        return Err(EmployeeValidationError::TooShort {
            field,
            min: MIN_TEXT_FIELD_CHARS,
            actual,
        });
    }

    Ok(())
}
