//! Page Policy Tests
//!
//! Placement rules over every page type:
//! - SEO-only pages reject every section type
//! - Disallowed types report the exact allow-list and what is still free
//! - Singletons report the id of the section already on the page
//! - Repeatable pairs never report duplicates

use std::sync::Arc;

use pagesmith::content::{PageType, SectionType};
use pagesmith::policy::{
    fixed_sections, is_repeatable, ExistingSection, PolicyEngine, PolicyError,
};
use pagesmith::schema::SectionSchemaRegistry;
use serde_json::json;
use uuid::Uuid;

// =============================================================================
// Helper Functions
// =============================================================================

fn engine() -> PolicyEngine {
    PolicyEngine::new(Arc::new(SectionSchemaRegistry::standard()))
}

fn placed(section_type: SectionType) -> ExistingSection {
    ExistingSection {
        id: Uuid::new_v4(),
        section_type,
    }
}

// =============================================================================
// Allow-list Tests
// =============================================================================

#[test]
fn test_every_allowed_type_accepted_on_empty_page() {
    let engine = engine();
    for page_type in PageType::ALL {
        let Some(allowed) = fixed_sections(page_type) else {
            continue;
        };
        for section_type in allowed {
            engine
                .authorize_create(page_type, *section_type, &[])
                .unwrap_or_else(|e| panic!("{} on {}: {}", section_type, page_type, e));
        }
    }
}

#[test]
fn test_every_disallowed_type_reports_exact_allow_list() {
    let engine = engine();
    for page_type in PageType::ALL {
        let Some(allowed) = fixed_sections(page_type) else {
            continue;
        };
        for section_type in SectionType::ALL {
            if allowed.contains(&section_type) {
                continue;
            }
            match engine.authorize_create(page_type, section_type, &[]) {
                Err(PolicyError::InvalidSectionType {
                    allowed_sections,
                    available_sections,
                    attempted,
                    ..
                }) => {
                    assert_eq!(attempted, section_type);
                    assert_eq!(allowed_sections, allowed);
                    assert_eq!(available_sections, allowed);
                }
                other => panic!("{} on {}: {:?}", section_type, page_type, other),
            }
        }
    }
}

#[test]
fn test_blog_rejects_every_section() {
    let engine = engine();
    for section_type in SectionType::ALL {
        let err = engine
            .authorize_create(PageType::Blog, section_type, &[])
            .unwrap_err();
        assert_eq!(err.code(), "SECTIONS_NOT_ALLOWED");
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn test_legal_pages_take_rich_text_only() {
    let engine = engine();
    for page_type in [PageType::PrivacyPolicy, PageType::TermsOfService] {
        assert!(engine
            .authorize_create(page_type, SectionType::RichText, &[])
            .is_ok());
        assert!(engine
            .authorize_create(page_type, SectionType::Hero, &[])
            .is_err());
    }
}

// =============================================================================
// Duplicate Tests
// =============================================================================

/// Every singleton type reports the first section's id.
#[test]
fn test_singletons_report_existing_id() {
    let engine = engine();
    for page_type in PageType::ALL {
        let Some(allowed) = fixed_sections(page_type) else {
            continue;
        };
        for section_type in allowed.iter().copied() {
            if is_repeatable(page_type, section_type) {
                continue;
            }
            let first = placed(section_type);
            let err = engine
                .authorize_create(page_type, section_type, &[first])
                .unwrap_err();
            assert_eq!(
                err,
                PolicyError::DuplicateSection {
                    page_type,
                    section_type,
                    existing_section_id: first.id,
                }
            );
            assert_eq!(err.status_code(), 409);
        }
    }
}

#[test]
fn test_repeatable_pairs_accept_many() {
    let engine = engine();
    for (page_type, section_type) in [
        (PageType::Sports, SectionType::Standings),
        (PageType::News, SectionType::Timeline),
    ] {
        let existing: Vec<_> = (0..5).map(|_| placed(section_type)).collect();
        assert!(engine
            .authorize_create(page_type, section_type, &existing)
            .is_ok());
    }
}

/// A used singleton drops out of the available list; repeatables stay.
#[test]
fn test_available_sections_track_usage() {
    let engine = engine();
    let existing = [
        placed(SectionType::Hero),
        placed(SectionType::Standings),
        placed(SectionType::CallToAction),
    ];
    let err = engine
        .authorize_create(PageType::Sports, SectionType::Team, &existing)
        .unwrap_err();
    let PolicyError::InvalidSectionType {
        available_sections, ..
    } = err
    else {
        panic!("expected InvalidSectionType");
    };
    assert_eq!(
        available_sections,
        vec![SectionType::SportsCards, SectionType::Standings]
    );
}

// =============================================================================
// Error Body Tests
// =============================================================================

#[test]
fn test_error_bodies_are_self_describing() {
    let engine = engine();

    let body = engine
        .authorize_create(PageType::Blog, SectionType::Hero, &[])
        .unwrap_err()
        .to_body();
    assert_eq!(body.code, "SECTIONS_NOT_ALLOWED");
    assert!(body.details["allowed_sections"].is_null());

    let report_body = engine
        .authorize_content_write(SectionType::Hero, &json!({}))
        .unwrap_err()
        .to_body();
    let value = serde_json::to_value(&report_body).unwrap();
    assert_eq!(value["code"], "CONTENT_VALIDATION_FAILED");
    assert_eq!(value["details"]["section_type"], "hero");
    assert!(!value["help"]["actions"].as_array().unwrap().is_empty());
}

#[test]
fn test_policy_errors_are_not_retryable() {
    let engine = engine();
    let errors = [
        engine
            .authorize_create(PageType::Blog, SectionType::Hero, &[])
            .unwrap_err(),
        engine
            .authorize_create(PageType::Faq, SectionType::Team, &[])
            .unwrap_err(),
        engine
            .authorize_content_write(SectionType::FaqList, &json!([]))
            .unwrap_err(),
    ];
    assert!(errors.iter().all(|e| !e.is_retryable()));
}
