//! # Service Errors
//!
//! Error codes:
//! - policy codes (SECTIONS_NOT_ALLOWED, INVALID_SECTION_TYPE, DUPLICATE_SECTION,
//!   CONTENT_VALIDATION_FAILED) pass through unchanged
//! - PAGE_NOT_FOUND / SECTION_NOT_FOUND (404)
//! - UNSUPPORTED_LANGUAGE, INVALID_ALIAS, INVALID_SEO, INVALID_ORDER (400)
//! - DUPLICATE_ALIAS (409)

use thiserror::Error;
use uuid::Uuid;

use crate::content::{ModelError, PageType};
use crate::policy::PolicyError;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(ModelError),

    #[error("Page '{0}' has not been initialized")]
    PageNotFound(PageType),

    #[error("Section not found: {0}")]
    SectionNotFound(Uuid),

    #[error("Language '{language}' is not supported (supported: {})", .supported.join(", "))]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Alias '{alias}' is already used in language '{language}' by page {page_id}")]
    DuplicateAlias {
        alias: String,
        language: String,
        page_id: Uuid,
    },

    #[error("Invalid SEO field '{field}': {reason}")]
    InvalidSeo { field: String, reason: String },

    #[error("Invalid section order: {0}")]
    InvalidOrder(String),
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidAlias { alias, reason } => ServiceError::InvalidAlias { alias, reason },
            ModelError::InvalidSeo { field, reason } => ServiceError::InvalidSeo { field, reason },
            other => ServiceError::Model(other),
        }
    }
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Policy(e) => e.code(),
            ServiceError::Store(e) => e.code(),
            ServiceError::Model(e) => e.code(),
            ServiceError::PageNotFound(_) => "PAGE_NOT_FOUND",
            ServiceError::SectionNotFound(_) => "SECTION_NOT_FOUND",
            ServiceError::UnsupportedLanguage { .. } => "UNSUPPORTED_LANGUAGE",
            ServiceError::InvalidAlias { .. } => "INVALID_ALIAS",
            ServiceError::DuplicateAlias { .. } => "DUPLICATE_ALIAS",
            ServiceError::InvalidSeo { .. } => "INVALID_SEO",
            ServiceError::InvalidOrder(_) => "INVALID_ORDER",
        }
    }

    /// HTTP status for the surrounding layer
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Policy(e) => e.status_code(),
            ServiceError::Store(StoreError::NotFound { .. }) => 404,
            ServiceError::Store(StoreError::UniqueViolation { .. })
            | ServiceError::Store(StoreError::AliasTaken { .. }) => 409,
            ServiceError::Store(StoreError::CorruptDocument { .. })
            | ServiceError::Store(StoreError::LockPoisoned) => 500,
            ServiceError::Model(_) => 400,
            ServiceError::PageNotFound(_) | ServiceError::SectionNotFound(_) => 404,
            ServiceError::DuplicateAlias { .. } => 409,
            ServiceError::UnsupportedLanguage { .. }
            | ServiceError::InvalidAlias { .. }
            | ServiceError::InvalidSeo { .. }
            | ServiceError::InvalidOrder(_) => 400,
        }
    }
}
