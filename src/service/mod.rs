//! # Content Service
//!
//! Ties the policy engine, the store and the notifier into the write path
//! used by front-ends (CLI today, an HTTP layer later).

mod content;
mod errors;

pub use content::{ContentService, PageTranslationInput, SectionWrite};
pub use errors::{ServiceError, ServiceResult};
