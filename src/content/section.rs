//! Sections and their per-language payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::types::SectionType;
use super::{ModelError, ModelResult};

/// A typed content block on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub page_id: Uuid,
    pub section_type: SectionType,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Section {
    /// Create a section with a fresh id
    pub fn new(page_id: Uuid, section_type: SectionType, order_index: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            page_id,
            section_type,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Section payload tagged with its section type.
///
/// Stored as `{"type": "<section-type>", "data": {...}}` so a document read
/// back from storage identifies its own shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedContent {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub data: Value,
}

impl TaggedContent {
    pub fn new(section_type: SectionType, data: Value) -> Self {
        Self { section_type, data }
    }

    /// Encode as a storage document
    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "type": self.section_type,
            "data": self.data,
        })
    }

    /// Decode a storage document
    pub fn from_document(document: &Value) -> ModelResult<Self> {
        serde_json::from_value(document.clone())
            .map_err(|e| ModelError::MalformedDocument(e.to_string()))
    }
}

/// Per-language content of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTranslation {
    pub section_id: Uuid,
    pub language: String,
    pub content: TaggedContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SectionTranslation {
    pub fn new(section_id: Uuid, language: impl Into<String>, content: TaggedContent) -> Self {
        let now = Utc::now();
        Self {
            section_id,
            language: language.into(),
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
