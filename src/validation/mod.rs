//! Section Content Validator
//!
//! Runs the registered schema for a section type over an untyped payload
//! and, on failure, builds a report precise enough for a client to fix the
//! payload without reading documentation: every violated field with its
//! category, message, expected format, example value and supplied value.

mod report;
mod validator;

pub use report::{
    ErrorCategory, ExamplePayload, FieldViolation, SuppliedValue, ValidationOutcome,
    ValidationReport, UNDEFINED_MARKER,
};
pub use validator::{example_at, SectionValidator, ROOT_PATH};
