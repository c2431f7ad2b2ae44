//! In-memory content store

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::ContentStore;
use crate::content::{Page, PageTranslation, PageType, Section, SectionTranslation, TaggedContent};
use crate::policy::is_repeatable;

#[derive(Debug, Default)]
struct Tables {
    pages: HashMap<PageType, Page>,
    page_translations: HashMap<(Uuid, String), PageTranslation>,
    sections: HashMap<Uuid, Section>,
    section_translations: HashMap<(Uuid, String), StoredDocument>,
}

/// Section translation row; content is kept as a `{"type", "data"}` document
#[derive(Debug, Clone)]
struct StoredDocument {
    document: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredDocument {
    fn decode(&self, section_id: Uuid, language: &str) -> StoreResult<SectionTranslation> {
        let content = TaggedContent::from_document(&self.document).map_err(|e| {
            StoreError::CorruptDocument {
                section_id,
                language: language.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(SectionTranslation {
            section_id,
            language: language.to_string(),
            content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl Tables {
    fn page_type_of(&self, page_id: Uuid) -> Option<PageType> {
        self.pages
            .values()
            .find(|p| p.id == page_id)
            .map(|p| p.page_type)
    }
}

/// Content store backed by hash maps behind a single lock.
///
/// Every constraint check and the write it guards run under one write lock.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    tables: RwLock<Tables>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ContentStore for MemoryContentStore {
    fn ensure_page(&self, page_type: PageType) -> StoreResult<(Page, bool)> {
        let mut tables = self.write()?;
        if let Some(page) = tables.pages.get(&page_type) {
            return Ok((page.clone(), false));
        }
        let page = Page::new(page_type);
        tables.pages.insert(page_type, page.clone());
        Ok((page, true))
    }

    fn page(&self, page_type: PageType) -> StoreResult<Option<Page>> {
        Ok(self.read()?.pages.get(&page_type).cloned())
    }

    fn pages(&self) -> StoreResult<Vec<Page>> {
        let tables = self.read()?;
        Ok(PageType::ALL
            .iter()
            .filter_map(|t| tables.pages.get(t).cloned())
            .collect())
    }

    fn upsert_page_translation(
        &self,
        mut translation: PageTranslation,
    ) -> StoreResult<PageTranslation> {
        let mut tables = self.write()?;

        if tables.page_type_of(translation.page_id).is_none() {
            return Err(StoreError::not_found("Page", translation.page_id));
        }

        if !translation.is_placeholder() {
            let key = translation.alias_key();
            let taken = tables.page_translations.values().find(|t| {
                t.language == translation.language
                    && t.page_id != translation.page_id
                    && !t.is_placeholder()
                    && t.alias_key() == key
            });
            if let Some(other) = taken {
                return Err(StoreError::AliasTaken {
                    language: translation.language.clone(),
                    alias: translation.alias.clone(),
                    page_id: other.page_id,
                });
            }
        }

        let row_key = (translation.page_id, translation.language.clone());
        let now = Utc::now();
        translation.updated_at = now;
        if let Some(existing) = tables.page_translations.get(&row_key) {
            translation.created_at = existing.created_at;
        }
        tables.page_translations.insert(row_key, translation.clone());
        Ok(translation)
    }

    fn page_translation(
        &self,
        page_id: Uuid,
        language: &str,
    ) -> StoreResult<Option<PageTranslation>> {
        Ok(self
            .read()?
            .page_translations
            .get(&(page_id, language.to_string()))
            .cloned())
    }

    fn insert_section(&self, section: &Section) -> StoreResult<()> {
        let mut tables = self.write()?;

        let page_type = tables
            .page_type_of(section.page_id)
            .ok_or_else(|| StoreError::not_found("Page", section.page_id))?;

        if !is_repeatable(page_type, section.section_type) {
            let existing = tables
                .sections
                .values()
                .filter(|s| s.page_id == section.page_id && s.section_type == section.section_type)
                .min_by_key(|s| (s.created_at, s.order_index));
            if let Some(existing) = existing {
                return Err(StoreError::UniqueViolation {
                    page_id: section.page_id,
                    section_type: section.section_type,
                    existing_section_id: existing.id,
                });
            }
        }

        tables.sections.insert(section.id, section.clone());
        Ok(())
    }

    fn section(&self, section_id: Uuid) -> StoreResult<Option<Section>> {
        Ok(self.read()?.sections.get(&section_id).cloned())
    }

    fn sections_for_page(&self, page_id: Uuid) -> StoreResult<Vec<Section>> {
        let tables = self.read()?;
        let mut sections: Vec<Section> = tables
            .sections
            .values()
            .filter(|s| s.page_id == page_id)
            .cloned()
            .collect();
        sections.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(sections)
    }

    fn set_section_orders(&self, orders: &[(Uuid, i32)]) -> StoreResult<()> {
        let mut tables = self.write()?;

        if let Some((missing, _)) = orders.iter().find(|(id, _)| !tables.sections.contains_key(id)) {
            return Err(StoreError::not_found("Section", missing));
        }

        let now = Utc::now();
        for (id, order_index) in orders {
            if let Some(section) = tables.sections.get_mut(id) {
                section.order_index = *order_index;
                section.updated_at = now;
            }
        }
        Ok(())
    }

    fn delete_section(&self, section_id: Uuid) -> StoreResult<usize> {
        let mut tables = self.write()?;

        if tables.sections.remove(&section_id).is_none() {
            return Err(StoreError::not_found("Section", section_id));
        }

        let before = tables.section_translations.len();
        tables
            .section_translations
            .retain(|(id, _), _| *id != section_id);
        Ok(before - tables.section_translations.len())
    }

    fn upsert_section_translation(
        &self,
        mut translation: SectionTranslation,
    ) -> StoreResult<SectionTranslation> {
        let mut tables = self.write()?;

        if !tables.sections.contains_key(&translation.section_id) {
            return Err(StoreError::not_found("Section", translation.section_id));
        }

        let row_key = (translation.section_id, translation.language.clone());
        translation.updated_at = Utc::now();
        if let Some(existing) = tables.section_translations.get(&row_key) {
            translation.created_at = existing.created_at;
        }
        tables.section_translations.insert(
            row_key,
            StoredDocument {
                document: translation.content.to_document(),
                created_at: translation.created_at,
                updated_at: translation.updated_at,
            },
        );
        Ok(translation)
    }

    fn section_translation(
        &self,
        section_id: Uuid,
        language: &str,
    ) -> StoreResult<Option<SectionTranslation>> {
        self.read()?
            .section_translations
            .get(&(section_id, language.to_string()))
            .map(|row| row.decode(section_id, language))
            .transpose()
    }
}
