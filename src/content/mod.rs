//! # Content Model
//!
//! Pages, sections and their per-language translations, plus the blog
//! aggregates that live next to them.
//!
//! - **Page**: one per `PageType`, created at initialization
//! - **PageTranslation**: alias + SEO metadata per language
//! - **Section**: typed content block with an order index
//! - **SectionTranslation**: per-language payload tagged with its section type

pub mod blog;
pub mod page;
pub mod section;
pub mod types;

pub use blog::{BlogCategory, BlogPost, BlogTranslation, Comment, CommentStatus, PostStatus};
pub use page::{Page, PageTranslation, SeoMetadata, TwitterCard, HOME_ALIAS_PLACEHOLDER};
pub use section::{Section, SectionTranslation, TaggedContent};
pub use types::{PageType, SectionType};

use thiserror::Error;

/// Result type for content model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the content model itself
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Unknown page type: {0}")]
    UnknownPageType(String),

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    /// Alias is empty or not a slug
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    /// SEO field violates its constraint
    #[error("Invalid SEO field '{field}': {reason}")]
    InvalidSeo { field: String, reason: String },

    /// Status transition not permitted from the current state
    #[error("Cannot {action} a {entity} that is {status}")]
    InvalidTransition {
        entity: &'static str,
        action: &'static str,
        status: String,
    },

    /// Reply targets a comment on another post
    #[error("Reply must belong to the same post as its parent comment")]
    ReplyPostMismatch,

    /// Stored section document does not decode
    #[error("Malformed section document: {0}")]
    MalformedDocument(String),
}

impl ModelError {
    /// Returns the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::UnknownPageType(_) => "UNKNOWN_PAGE_TYPE",
            ModelError::UnknownSectionType(_) => "UNKNOWN_SECTION_TYPE",
            ModelError::InvalidAlias { .. } => "INVALID_ALIAS",
            ModelError::InvalidSeo { .. } => "INVALID_SEO",
            ModelError::InvalidTransition { .. } => "INVALID_TRANSITION",
            ModelError::ReplyPostMismatch => "REPLY_POST_MISMATCH",
            ModelError::MalformedDocument(_) => "MALFORMED_DOCUMENT",
        }
    }
}
