//! # Store Errors

use thiserror::Error;
use uuid::Uuid;

use crate::content::SectionType;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Content store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// (page, section type) already taken by a singleton section
    #[error("Page {page_id} already holds a '{section_type}' section ({existing_section_id})")]
    UniqueViolation {
        page_id: Uuid,
        section_type: SectionType,
        existing_section_id: Uuid,
    },

    /// Alias already used by another page in the same language
    #[error("Alias '{alias}' is already used in language '{language}' by page {page_id}")]
    AliasTaken {
        language: String,
        alias: String,
        page_id: Uuid,
    },

    /// A stored section document no longer decodes
    #[error("Corrupt section document for {section_id} ({language}): {reason}")]
    CorruptDocument {
        section_id: Uuid,
        language: String,
        reason: String,
    },

    #[error("Lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "STORE_NOT_FOUND",
            StoreError::UniqueViolation { .. } => "STORE_UNIQUE_VIOLATION",
            StoreError::AliasTaken { .. } => "STORE_ALIAS_TAKEN",
            StoreError::CorruptDocument { .. } => "STORE_CORRUPT_DOCUMENT",
            StoreError::LockPoisoned => "STORE_LOCK_POISONED",
        }
    }
}
