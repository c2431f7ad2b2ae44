//! Content service
//!
//! Write path for pages and sections:
//! placement policy -> payload validation -> store -> notifier.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use crate::config::AppConfig;
use crate::content::page::normalize_alias;
use crate::content::{
    Page, PageTranslation, PageType, Section, SectionTranslation, SectionType, SeoMetadata,
    TaggedContent, HOME_ALIAS_PLACEHOLDER,
};
use crate::notify::{
    create_email_sender, ContentSubscriber, ContentUpdateSubject, EmailUpdateSubscriber,
    PublishReport, SectionUpdateEvent,
};
use crate::policy::{ExistingSection, PolicyEngine, PolicyError};
use crate::schema::SectionSchemaRegistry;
use crate::store::{ContentStore, StoreError};

/// Caller-supplied page translation fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTranslationInput {
    /// Ignored for the home page
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub seo: SeoMetadata,
}

/// Result of a section translation write
#[derive(Debug, Clone, PartialEq)]
pub struct SectionWrite {
    pub translation: SectionTranslation,
    pub notified: PublishReport,
}

pub struct ContentService<S: ContentStore> {
    store: S,
    policy: PolicyEngine,
    notifier: ContentUpdateSubject,
    languages: Vec<String>,
}

impl<S: ContentStore> ContentService<S> {
    pub fn new(store: S, registry: Arc<SectionSchemaRegistry>, languages: Vec<String>) -> Self {
        Self {
            store,
            policy: PolicyEngine::new(registry),
            notifier: ContentUpdateSubject::new(),
            languages,
        }
    }

    /// Build a service from configuration, subscribing the email notifier
    /// when notifications are enabled.
    pub fn from_config(store: S, registry: Arc<SectionSchemaRegistry>, config: &AppConfig) -> Self {
        let mut service = Self::new(store, registry, config.languages.clone());
        if config.notifications.enabled {
            let sender = create_email_sender(config.notifications.smtp.clone());
            service.subscribe(Arc::new(EmailUpdateSubscriber::new(
                sender,
                config.notifications.recipients.clone(),
            )));
        }
        service
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> &PolicyEngine {
        &self.policy
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// Create every missing page. Returns how many were created.
    pub fn initialize_pages(&self) -> ServiceResult<usize> {
        let mut created = 0;
        for page_type in PageType::ALL {
            let (page, is_new) = self.store.ensure_page(page_type)?;
            if is_new {
                created += 1;
                tracing::info!(page_type = %page_type, page_id = %page.id, "page created");
            }
        }
        tracing::info!(created, "pages initialized");
        Ok(created)
    }

    pub fn page(&self, page_type: PageType) -> ServiceResult<Page> {
        self.store
            .page(page_type)?
            .ok_or(ServiceError::PageNotFound(page_type))
    }

    pub fn pages(&self) -> ServiceResult<Vec<Page>> {
        Ok(self.store.pages()?)
    }

    /// Create or replace a page's alias and SEO data for one language.
    ///
    /// The home page always stores the reserved placeholder alias.
    pub fn upsert_page_translation(
        &self,
        page_type: PageType,
        language: &str,
        input: PageTranslationInput,
    ) -> ServiceResult<PageTranslation> {
        self.check_language(language)?;
        let page = self.page(page_type)?;

        let alias = if page.uses_alias_placeholder() {
            HOME_ALIAS_PLACEHOLDER.to_string()
        } else {
            normalize_alias(input.alias.as_deref().unwrap_or_default())?
        };
        input.seo.validate()?;

        let now = Utc::now();
        let translation = PageTranslation {
            page_id: page.id,
            language: language.to_string(),
            alias,
            seo: input.seo,
            created_at: now,
            updated_at: now,
        };

        let stored = match self.store.upsert_page_translation(translation) {
            Ok(stored) => stored,
            Err(StoreError::AliasTaken {
                language,
                alias,
                page_id,
            }) => {
                tracing::warn!(page_type = %page_type, %language, %alias, "alias already taken");
                return Err(ServiceError::DuplicateAlias {
                    alias,
                    language,
                    page_id,
                });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(page_type = %page_type, language, alias = %stored.alias, "page translation saved");
        Ok(stored)
    }

    pub fn page_translation(
        &self,
        page_type: PageType,
        language: &str,
    ) -> ServiceResult<Option<PageTranslation>> {
        let page = self.page(page_type)?;
        Ok(self.store.page_translation(page.id, language)?)
    }

    // ========================================================================
    // Sections
    // ========================================================================

    /// Add a section to a page.
    ///
    /// The order index defaults to one past the current maximum.
    pub fn create_section(
        &self,
        page_type: PageType,
        section_type: SectionType,
        order_index: Option<i32>,
    ) -> ServiceResult<Section> {
        let page = self.page(page_type)?;
        let existing = self.store.sections_for_page(page.id)?;
        let placed: Vec<ExistingSection> = existing.iter().map(ExistingSection::from).collect();

        if let Err(e) = self.policy.authorize_create(page_type, section_type, &placed) {
            tracing::warn!(page_type = %page_type, section_type = %section_type, code = e.code(), "section create rejected");
            return Err(e.into());
        }

        let order_index = match order_index {
            Some(index) => index,
            None => match existing.iter().map(|s| s.order_index).max() {
                None => 0,
                Some(max) => max.checked_add(1).ok_or_else(|| {
                    ServiceError::InvalidOrder(format!(
                        "no order index after {}; reorder the page first",
                        max
                    ))
                })?,
            },
        };
        let section = Section::new(page.id, section_type, order_index);

        match self.store.insert_section(&section) {
            Ok(()) => {}
            // Lost a race with a concurrent create
            Err(StoreError::UniqueViolation {
                existing_section_id,
                ..
            }) => {
                tracing::warn!(page_type = %page_type, section_type = %section_type, "duplicate section caught by store");
                return Err(PolicyError::DuplicateSection {
                    page_type,
                    section_type,
                    existing_section_id,
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            page_type = %page_type,
            section_type = %section_type,
            section_id = %section.id,
            order_index,
            "section created"
        );
        Ok(section)
    }

    pub fn section(&self, section_id: Uuid) -> ServiceResult<Section> {
        self.store
            .section(section_id)?
            .ok_or(ServiceError::SectionNotFound(section_id))
    }

    /// Sections of a page ordered by order index, then creation time
    pub fn list_sections(&self, page_type: PageType) -> ServiceResult<Vec<Section>> {
        let page = self.page(page_type)?;
        Ok(self.store.sections_for_page(page.id)?)
    }

    /// Reassign order indexes so the page's sections follow `ordered_ids`.
    ///
    /// `ordered_ids` must name every section of the page exactly once.
    pub fn reorder_sections(
        &self,
        page_type: PageType,
        ordered_ids: &[Uuid],
    ) -> ServiceResult<Vec<Section>> {
        let page = self.page(page_type)?;
        let current: HashSet<Uuid> = self
            .store
            .sections_for_page(page.id)?
            .iter()
            .map(|s| s.id)
            .collect();

        let requested: HashSet<Uuid> = ordered_ids.iter().copied().collect();
        if requested.len() != ordered_ids.len() {
            return Err(ServiceError::InvalidOrder("section ids repeat".into()));
        }
        if requested != current {
            return Err(ServiceError::InvalidOrder(format!(
                "expected the {} section(s) of page '{}', got {}",
                current.len(),
                page_type,
                ordered_ids.len()
            )));
        }

        let orders: Vec<(Uuid, i32)> = ordered_ids
            .iter()
            .zip(0..)
            .map(|(id, index)| (*id, index))
            .collect();
        self.store.set_section_orders(&orders)?;

        tracing::info!(page_type = %page_type, sections = orders.len(), "sections reordered");
        Ok(self.store.sections_for_page(page.id)?)
    }

    /// Delete a section and all of its translations
    pub fn delete_section(&self, section_id: Uuid) -> ServiceResult<usize> {
        let removed = self.store.delete_section(section_id).map_err(|e| match e {
            StoreError::NotFound { .. } => ServiceError::SectionNotFound(section_id),
            other => other.into(),
        })?;
        tracing::info!(%section_id, translations = removed, "section deleted");
        Ok(removed)
    }

    // ========================================================================
    // Section translations
    // ========================================================================

    /// Validate, persist and publish one language's payload for a section.
    ///
    /// Subscribers run after the write commits; their failures are counted
    /// in `SectionWrite::notified` and never undo the write.
    pub fn upsert_section_translation(
        &self,
        section_id: Uuid,
        language: &str,
        content: Value,
    ) -> ServiceResult<SectionWrite> {
        self.check_language(language)?;
        let section = self.section(section_id)?;
        let page_type = self.page_type_of(&section)?;

        if let Err(e) = self
            .policy
            .authorize_content_write(section.section_type, &content)
        {
            tracing::warn!(
                %section_id,
                section_type = %section.section_type,
                language,
                code = e.code(),
                "section content rejected"
            );
            return Err(e.into());
        }

        let translation = SectionTranslation::new(
            section_id,
            language,
            TaggedContent::new(section.section_type, content),
        );
        let stored = self.store.upsert_section_translation(translation)?;
        tracing::info!(%section_id, section_type = %section.section_type, language, "section translation saved");

        let event = SectionUpdateEvent::from_translation(page_type, &stored);
        let notified = self.notifier.publish(&event);

        Ok(SectionWrite {
            translation: stored,
            notified,
        })
    }

    pub fn section_translation(
        &self,
        section_id: Uuid,
        language: &str,
    ) -> ServiceResult<Option<SectionTranslation>> {
        self.section(section_id)?;
        Ok(self.store.section_translation(section_id, language)?)
    }

    // ========================================================================
    // Subscribers
    // ========================================================================

    pub fn subscribe(&mut self, subscriber: Arc<dyn ContentSubscriber>) -> bool {
        self.notifier.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn ContentSubscriber>) -> bool {
        self.notifier.unsubscribe(subscriber)
    }

    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }

    fn check_language(&self, language: &str) -> ServiceResult<()> {
        if self.languages.iter().any(|l| l == language) {
            return Ok(());
        }
        Err(ServiceError::UnsupportedLanguage {
            language: language.to_string(),
            supported: self.languages.clone(),
        })
    }

    fn page_type_of(&self, section: &Section) -> ServiceResult<PageType> {
        self.store
            .pages()?
            .into_iter()
            .find(|p| p.id == section.page_id)
            .map(|p| p.page_type)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Page",
                id: section.page_id.to_string(),
            }
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContentStore;
    use serde_json::json;

    fn service() -> ContentService<MemoryContentStore> {
        let service = ContentService::new(
            MemoryContentStore::new(),
            Arc::new(SectionSchemaRegistry::standard()),
            vec!["en".into(), "de".into()],
        );
        service.initialize_pages().unwrap();
        service
    }

    #[test]
    fn test_initialize_pages_idempotent() {
        let service = service();
        assert_eq!(service.pages().unwrap().len(), PageType::ALL.len());
        assert_eq!(service.initialize_pages().unwrap(), 0);
    }

    #[test]
    fn test_uninitialized_page() {
        let service = ContentService::new(
            MemoryContentStore::new(),
            Arc::new(SectionSchemaRegistry::standard()),
            vec!["en".into()],
        );
        assert_eq!(
            service.page(PageType::Faq).unwrap_err(),
            ServiceError::PageNotFound(PageType::Faq)
        );
    }

    #[test]
    fn test_order_defaults_to_next_index() {
        let service = service();
        let hero = service
            .create_section(PageType::HowItWorks, SectionType::Hero, Some(7))
            .unwrap();
        let steps = service
            .create_section(PageType::HowItWorks, SectionType::Steps, None)
            .unwrap();
        assert_eq!(hero.order_index, 7);
        assert_eq!(steps.order_index, 8);

        let first = service
            .create_section(PageType::Contact, SectionType::Hero, None)
            .unwrap();
        assert_eq!(first.order_index, 0);
    }

    #[test]
    fn test_order_default_past_max_index_rejected() {
        let service = service();
        service
            .create_section(PageType::About, SectionType::Hero, Some(i32::MAX))
            .unwrap();

        let err = service
            .create_section(PageType::About, SectionType::Team, None)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ORDER");
        assert_eq!(service.list_sections(PageType::About).unwrap().len(), 1);

        // An explicit index still works
        let team = service
            .create_section(PageType::About, SectionType::Team, Some(1))
            .unwrap();
        assert_eq!(team.order_index, 1);
    }

    #[test]
    fn test_reorder_requires_permutation() {
        let service = service();
        let hero = service
            .create_section(PageType::Contact, SectionType::Hero, None)
            .unwrap();
        let info = service
            .create_section(PageType::Contact, SectionType::ContactInfo, None)
            .unwrap();

        let reordered = service
            .reorder_sections(PageType::Contact, &[info.id, hero.id])
            .unwrap();
        assert_eq!(reordered[0].id, info.id);
        assert_eq!(reordered[1].id, hero.id);

        for bad in [vec![info.id], vec![info.id, info.id], vec![info.id, Uuid::new_v4()]] {
            assert_eq!(
                service
                    .reorder_sections(PageType::Contact, &bad)
                    .unwrap_err()
                    .code(),
                "INVALID_ORDER"
            );
        }
    }

    #[test]
    fn test_unsupported_language() {
        let service = service();
        let section = service
            .create_section(PageType::PrivacyPolicy, SectionType::RichText, None)
            .unwrap();
        let err = service
            .upsert_section_translation(section.id, "fr", json!({}))
            .unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_LANGUAGE");
    }

    #[test]
    fn test_missing_section() {
        let service = service();
        let id = Uuid::new_v4();
        assert_eq!(
            service.delete_section(id).unwrap_err(),
            ServiceError::SectionNotFound(id)
        );
        assert_eq!(
            service.section_translation(id, "en").unwrap_err(),
            ServiceError::SectionNotFound(id)
        );
    }

    #[test]
    fn test_alias_required_outside_home() {
        let service = service();
        let err = service
            .upsert_page_translation(PageType::Faq, "en", PageTranslationInput::default())
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ALIAS");
    }

    #[test]
    fn test_seo_checked_before_write() {
        let service = service();
        let input = PageTranslationInput {
            alias: Some("faq".into()),
            seo: SeoMetadata {
                title: Some("x".repeat(71)),
                ..SeoMetadata::default()
            },
        };
        let err = service
            .upsert_page_translation(PageType::Faq, "en", input)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_SEO");
        assert!(service
            .page_translation(PageType::Faq, "en")
            .unwrap()
            .is_none());
    }
}
