//! Validation report types
//!
//! A report is a normal output value, not an error. The policy layer decides
//! whether it becomes a client-visible failure.

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::content::SectionType;

/// Marker emitted as `current_value` for absent fields
pub const UNDEFINED_MARKER: &str = "undefined";

/// Violation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Field absent where required
    Missing,
    /// Wrong primitive type, or failed a pattern/URL/email check
    InvalidFormat,
    /// Right type, but a semantic constraint failed
    InvalidValue,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Missing => "MISSING",
            ErrorCategory::InvalidFormat => "INVALID_FORMAT",
            ErrorCategory::InvalidValue => "INVALID_VALUE",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value a client actually supplied for a field
#[derive(Debug, Clone, PartialEq)]
pub enum SuppliedValue {
    /// Field was absent
    Undefined,
    Value(Value),
}

impl SuppliedValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, SuppliedValue::Undefined)
    }
}

impl Serialize for SuppliedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SuppliedValue::Undefined => serializer.serialize_str(UNDEFINED_MARKER),
            SuppliedValue::Value(value) => value.serialize(serializer),
        }
    }
}

/// One field-level violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Dotted path with numeric array indices (`members.2.photo.url`)
    pub field: String,
    pub category: ErrorCategory,
    pub message: String,
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_value: Option<Value>,
    pub current_value: SuppliedValue,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.field, self.message)
    }
}

/// Full example payload shown alongside the violations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamplePayload {
    pub caption: String,
    pub payload: Value,
}

/// Everything a client needs to correct a payload in one round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub section_type: SectionType,
    pub section_description: String,
    pub errors: Vec<FieldViolation>,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    /// Descriptions of the violated fields
    pub field_descriptions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<ExamplePayload>,
    /// True when the section type has no registered schema
    pub generic_schema: bool,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Count of violations in a category
    pub fn count(&self, category: ErrorCategory) -> usize {
        self.errors.iter().filter(|v| v.category == category).count()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let fields: Vec<&str> = self.errors.iter().map(|v| v.field.as_str()).collect();
        format!(
            "{} violation(s) in {} content: {}",
            self.errors.len(),
            self.section_type,
            fields.join(", ")
        )
    }
}

/// Outcome of validating one payload
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationReport),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(report) => Some(report),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationReport> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(report) => Err(report),
        }
    }
}
