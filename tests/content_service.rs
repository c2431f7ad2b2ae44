//! Content Service Tests
//!
//! End-to-end write path over the in-memory store:
//! - policy -> validation -> store -> notifier ordering
//! - rejected writes persist nothing and notify nobody
//! - home alias placeholder and alias uniqueness
//! - section deletion cascades to translations

use std::sync::{Arc, Mutex};

use pagesmith::config::AppConfig;
use pagesmith::content::{PageType, SectionType, SeoMetadata, HOME_ALIAS_PLACEHOLDER};
use pagesmith::notify::{
    ContentSubscriber, EmailSender, EmailTemplate, EmailUpdateSubscriber, MockEmailSender,
    NotifyError, NotifyResult, SectionUpdateEvent,
};
use pagesmith::policy::PolicyError;
use pagesmith::schema::SectionSchemaRegistry;
use pagesmith::service::{ContentService, PageTranslationInput, ServiceError};
use pagesmith::store::{ContentStore, MemoryContentStore};
use pagesmith::validation::{ErrorCategory, SuppliedValue};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn service() -> ContentService<MemoryContentStore> {
    let service = ContentService::new(
        MemoryContentStore::new(),
        Arc::new(SectionSchemaRegistry::standard()),
        vec!["en".to_string(), "es".to_string()],
    );
    service.initialize_pages().unwrap();
    service
}

/// Records every event it sees
#[derive(Default)]
struct Inbox {
    events: Mutex<Vec<SectionUpdateEvent>>,
}

impl ContentSubscriber for Inbox {
    fn update(&self, event: &SectionUpdateEvent) -> NotifyResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    fn identity(&self) -> Option<&str> {
        Some("inbox")
    }
}

struct Broken;

impl ContentSubscriber for Broken {
    fn update(&self, _event: &SectionUpdateEvent) -> NotifyResult<()> {
        Err(NotifyError::Delivery("cache offline".into()))
    }
}

fn hero_payload() -> Value {
    json!({
        "title": "About our club",
        "description": "Founded in 1998 by a group of parents.",
        "background_image": {
            "url": "https://cdn.example.com/images/about.jpg",
            "alt": "Club house"
        }
    })
}

fn alias(alias: &str) -> PageTranslationInput {
    PageTranslationInput {
        alias: Some(alias.to_string()),
        seo: SeoMetadata::default(),
    }
}

// =============================================================================
// End-to-end Write Path
// =============================================================================

/// About page hero: the missing image URL is reported precisely, nothing is
/// stored, and the corrected payload is stored and published once.
#[test]
fn test_about_hero_end_to_end() {
    let mut service = service();
    let inbox = Arc::new(Inbox::default());
    assert!(service.subscribe(inbox.clone()));

    let hero = service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();

    let mut broken = hero_payload();
    broken["background_image"]
        .as_object_mut()
        .unwrap()
        .remove("url");

    let err = service
        .upsert_section_translation(hero.id, "en", broken)
        .unwrap_err();
    let ServiceError::Policy(PolicyError::ContentValidationFailed(report)) = &err else {
        panic!("expected ContentValidationFailed, got {err:?}");
    };
    assert_eq!(report.error_count(), 1);
    let violation = &report.errors[0];
    assert_eq!(violation.field, "background_image.url");
    assert_eq!(violation.category, ErrorCategory::Missing);
    assert_eq!(violation.current_value, SuppliedValue::Undefined);
    assert!(violation.message.contains("background image URL"));
    assert_eq!(
        violation.example_value,
        Some(json!("https://cdn.example.com/images/hero-stadium.jpg"))
    );

    assert!(service.section_translation(hero.id, "en").unwrap().is_none());
    assert!(inbox.events.lock().unwrap().is_empty());

    let write = service
        .upsert_section_translation(hero.id, "en", hero_payload())
        .unwrap();
    assert_eq!(write.notified.delivered, 1);
    assert_eq!(write.translation.content.section_type, SectionType::Hero);

    let stored = service.section_translation(hero.id, "en").unwrap().unwrap();
    assert_eq!(stored.content.data, hero_payload());
    assert_eq!(stored.content.to_document()["type"], "hero");

    let events = inbox.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].page_type, PageType::About);
    assert_eq!(events[0].section_id, hero.id);
    assert_eq!(events[0].language, "en");
}

#[test]
fn test_policy_rejections_surface_through_service() {
    let service = service();

    let err = service
        .create_section(PageType::Blog, SectionType::Hero, None)
        .unwrap_err();
    assert_eq!(err.code(), "SECTIONS_NOT_ALLOWED");

    let err = service
        .create_section(PageType::Contact, SectionType::Team, None)
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_SECTION_TYPE");

    let first = service
        .create_section(PageType::Contact, SectionType::Hero, None)
        .unwrap();
    let err = service
        .create_section(PageType::Contact, SectionType::Hero, None)
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Policy(PolicyError::DuplicateSection {
            page_type: PageType::Contact,
            section_type: SectionType::Hero,
            existing_section_id: first.id,
        })
    );
    assert_eq!(service.list_sections(PageType::Contact).unwrap().len(), 1);
}

#[test]
fn test_repeatable_sections_listed_in_order() {
    let service = service();
    let second = service
        .create_section(PageType::News, SectionType::Timeline, Some(2))
        .unwrap();
    let first = service
        .create_section(PageType::News, SectionType::Timeline, Some(1))
        .unwrap();
    let hero = service
        .create_section(PageType::News, SectionType::Hero, Some(0))
        .unwrap();

    let ids: Vec<_> = service
        .list_sections(PageType::News)
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![hero.id, first.id, second.id]);
}

/// A failing subscriber is counted but the write stands.
#[test]
fn test_subscriber_failure_does_not_undo_write() {
    let mut service = service();
    let inbox = Arc::new(Inbox::default());
    service.subscribe(Arc::new(Broken));
    service.subscribe(inbox.clone());

    let section = service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();
    let write = service
        .upsert_section_translation(section.id, "es", hero_payload())
        .unwrap();

    assert_eq!(write.notified.failed, 1);
    assert_eq!(write.notified.delivered, 1);
    assert!(service.section_translation(section.id, "es").unwrap().is_some());
    assert_eq!(inbox.events.lock().unwrap().len(), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut service = service();
    let inbox: Arc<dyn ContentSubscriber> = Arc::new(Inbox::default());
    service.subscribe(inbox.clone());
    assert!(!service.subscribe(inbox.clone()));
    assert!(service.unsubscribe(&inbox));
    assert_eq!(service.subscriber_count(), 0);

    let section = service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();
    let write = service
        .upsert_section_translation(section.id, "en", hero_payload())
        .unwrap();
    assert_eq!(write.notified.delivered, 0);
}

// =============================================================================
// Page Translations
// =============================================================================

#[test]
fn test_home_always_gets_placeholder_alias() {
    let service = service();
    for language in ["en", "es"] {
        let stored = service
            .upsert_page_translation(PageType::Home, language, alias("welcome"))
            .unwrap();
        assert_eq!(stored.alias, HOME_ALIAS_PLACEHOLDER);
    }

    let stored = service
        .upsert_page_translation(PageType::Home, "en", PageTranslationInput::default())
        .unwrap();
    assert!(stored.is_placeholder());
}

#[test]
fn test_alias_unique_per_language() {
    let service = service();
    service
        .upsert_page_translation(PageType::About, "en", alias("about-us"))
        .unwrap();

    let err = service
        .upsert_page_translation(PageType::Faq, "en", alias("About-Us"))
        .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_ALIAS");
    assert_eq!(err.status_code(), 409);

    service
        .upsert_page_translation(PageType::Faq, "es", alias("about-us"))
        .unwrap();
}

#[test]
fn test_page_translation_update_keeps_created_at() {
    let service = service();
    let first = service
        .upsert_page_translation(PageType::Faq, "en", alias("faq"))
        .unwrap();
    let second = service
        .upsert_page_translation(PageType::Faq, "en", alias("questions"))
        .unwrap();

    assert_eq!(first.created_at, second.created_at);
    let stored = service.page_translation(PageType::Faq, "en").unwrap().unwrap();
    assert_eq!(stored.alias, "questions");
}

// =============================================================================
// Deletion
// =============================================================================

#[test]
fn test_delete_section_cascades_and_frees_slot() {
    let service = service();
    let hero = service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();
    for language in ["en", "es"] {
        service
            .upsert_section_translation(hero.id, language, hero_payload())
            .unwrap();
    }

    assert_eq!(service.delete_section(hero.id).unwrap(), 2);
    assert!(service.store().section_translation(hero.id, "en").unwrap().is_none());
    assert_eq!(
        service.section(hero.id).unwrap_err(),
        ServiceError::SectionNotFound(hero.id)
    );

    // The singleton slot is free again.
    service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();
}

// =============================================================================
// Configuration Wiring
// =============================================================================

#[test]
fn test_from_config_subscribes_email_notifier() {
    let mut config = AppConfig::default();
    config.notifications.enabled = true;
    config.notifications.recipients = vec!["editor@example.com".to_string()];

    let service = ContentService::from_config(
        MemoryContentStore::new(),
        Arc::new(SectionSchemaRegistry::standard()),
        &config,
    );
    assert_eq!(service.subscriber_count(), 1);

    let disabled = ContentService::from_config(
        MemoryContentStore::new(),
        Arc::new(SectionSchemaRegistry::standard()),
        &AppConfig::default(),
    );
    assert_eq!(disabled.subscriber_count(), 0);
}

#[test]
fn test_email_subscriber_receives_updates() {
    let mut service = service();
    let outbox = Arc::new(MockEmailSender::new());
    let sender: Arc<dyn EmailSender> = outbox.clone();
    service.subscribe(Arc::new(EmailUpdateSubscriber::new(
        sender,
        vec!["a@example.com".to_string(), "b@example.com".to_string()],
    )));

    let section = service
        .create_section(PageType::About, SectionType::Hero, None)
        .unwrap();
    service
        .upsert_section_translation(section.id, "en", hero_payload())
        .unwrap();

    let sent = outbox.sent();
    assert_eq!(sent.len(), 2);
    let EmailTemplate::SectionUpdated { recipient, event } = &sent[0];
    assert_eq!(recipient, "a@example.com");
    assert_eq!(event.section_type, SectionType::Hero);
}
