//! Page-section policy engine
//!
//! The placement check reads the page's current sections as supplied by the
//! caller, so it is advisory: two concurrent creates can both pass it. The
//! store's (page, section type) uniqueness constraint is the authoritative
//! guard.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::errors::{PolicyError, PolicyResult};
use super::fixed_sections::{fixed_sections, is_repeatable};
use crate::content::{PageType, Section, SectionType};
use crate::schema::SectionSchemaRegistry;
use crate::validation::{SectionValidator, ValidationOutcome};

/// A section already on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingSection {
    pub id: Uuid,
    pub section_type: SectionType,
}

impl From<&Section> for ExistingSection {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id,
            section_type: section.section_type,
        }
    }
}

/// Decides which sections may be created and which payloads may be written
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    validator: SectionValidator,
}

impl PolicyEngine {
    pub fn new(registry: Arc<SectionSchemaRegistry>) -> Self {
        Self {
            validator: SectionValidator::new(registry),
        }
    }

    pub fn validator(&self) -> &SectionValidator {
        &self.validator
    }

    /// Allow-list for a page type
    pub fn allowed_sections(&self, page_type: PageType) -> Option<&'static [SectionType]> {
        fixed_sections(page_type)
    }

    /// Checks whether `attempted` may be added to a page of `page_type`
    /// that currently holds `existing`.
    pub fn authorize_create(
        &self,
        page_type: PageType,
        attempted: SectionType,
        existing: &[ExistingSection],
    ) -> PolicyResult<()> {
        let Some(allowed) = fixed_sections(page_type) else {
            return Err(PolicyError::SectionsNotAllowed { page_type });
        };

        if !allowed.contains(&attempted) {
            let available_sections = allowed
                .iter()
                .copied()
                .filter(|t| {
                    is_repeatable(page_type, *t) || !existing.iter().any(|e| e.section_type == *t)
                })
                .collect();
            return Err(PolicyError::InvalidSectionType {
                page_type,
                attempted,
                allowed_sections: allowed.to_vec(),
                available_sections,
            });
        }

        if !is_repeatable(page_type, attempted) {
            if let Some(conflict) = existing.iter().find(|e| e.section_type == attempted) {
                return Err(PolicyError::DuplicateSection {
                    page_type,
                    section_type: attempted,
                    existing_section_id: conflict.id,
                });
            }
        }

        Ok(())
    }

    /// Validates a payload and surfaces the report unchanged on failure
    pub fn authorize_content_write(
        &self,
        section_type: SectionType,
        content: &Value,
    ) -> PolicyResult<()> {
        match self.validator.validate(section_type, content) {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(report) => {
                Err(PolicyError::ContentValidationFailed(Box::new(report)))
            }
        }
    }
}
