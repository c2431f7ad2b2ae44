//! Schema registry errors
//!
//! Error codes:
//! - UNKNOWN_SECTION_TYPE: no schema registered for the type. Callers
//!   recover with the generic schema; it is never surfaced to clients.
//! - SCHEMA_ALREADY_REGISTERED: a type was registered twice

use thiserror::Error;

use crate::content::SectionType;

/// Result type for schema registry operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Registry lookup miss
    #[error("No schema registered for section type '{0}'")]
    UnknownSectionType(SectionType),

    /// Registration attempted for a type that already has an entry
    #[error("Schema for section type '{0}' is already registered")]
    AlreadyRegistered(SectionType),
}

impl SchemaError {
    /// Returns the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::UnknownSectionType(_) => "UNKNOWN_SECTION_TYPE",
            SchemaError::AlreadyRegistered(_) => "SCHEMA_ALREADY_REGISTERED",
        }
    }
}
