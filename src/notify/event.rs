//! # Update Events
//!
//! Payload fanned out after a section translation write commits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::content::{PageType, SectionTranslation, SectionType};

/// A section translation was created or replaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionUpdateEvent {
    pub section_id: Uuid,
    pub page_type: PageType,
    pub section_type: SectionType,
    pub language: String,
    /// The committed payload
    pub content: Value,
    pub occurred_at: DateTime<Utc>,
}

impl SectionUpdateEvent {
    /// Build the event for a committed translation
    pub fn from_translation(page_type: PageType, translation: &SectionTranslation) -> Self {
        Self {
            section_id: translation.section_id,
            page_type,
            section_type: translation.content.section_type,
            language: translation.language.clone(),
            content: translation.content.data.clone(),
            occurred_at: translation.updated_at,
        }
    }
}
