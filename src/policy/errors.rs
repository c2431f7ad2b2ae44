//! Placement and content policy errors
//!
//! Error codes:
//! - SECTIONS_NOT_ALLOWED (400): page type takes no sections
//! - INVALID_SECTION_TYPE (400): section type not in the page's allow-list
//! - DUPLICATE_SECTION (409): singleton section already on the page
//! - CONTENT_VALIDATION_FAILED (400): payload failed its schema
//!
//! All four are caused by caller input and are never retryable. Each one
//! renders to an `ErrorBody` carrying enough detail for a client to fix the
//! request on its own.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::content::{PageType, SectionType};
use crate::validation::ValidationReport;

/// Result type for policy checks
pub type PolicyResult<T> = Result<T, PolicyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("Page type '{page_type}' does not accept sections; it supports SEO data only")]
    SectionsNotAllowed { page_type: PageType },

    #[error("Section type '{attempted}' is not allowed on page type '{page_type}'")]
    InvalidSectionType {
        page_type: PageType,
        attempted: SectionType,
        allowed_sections: Vec<SectionType>,
        /// Allowed types not yet used on the page
        available_sections: Vec<SectionType>,
    },

    #[error("Page type '{page_type}' already has a '{section_type}' section ({existing_section_id})")]
    DuplicateSection {
        page_type: PageType,
        section_type: SectionType,
        existing_section_id: Uuid,
    },

    #[error("Content for section type '{}' failed validation with {} error(s)", .0.section_type, .0.errors.len())]
    ContentValidationFailed(Box<ValidationReport>),
}

/// Remediation hints attached to an error body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Help {
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

/// Client-facing structured error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
    pub help: Help,
}

impl PolicyError {
    /// Returns the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::SectionsNotAllowed { .. } => "SECTIONS_NOT_ALLOWED",
            PolicyError::InvalidSectionType { .. } => "INVALID_SECTION_TYPE",
            PolicyError::DuplicateSection { .. } => "DUPLICATE_SECTION",
            PolicyError::ContentValidationFailed(_) => "CONTENT_VALIDATION_FAILED",
        }
    }

    /// Returns the HTTP status the surrounding layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            PolicyError::DuplicateSection { .. } => 409,
            _ => 400,
        }
    }

    /// Policy errors are deterministic client errors
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Renders the error as a client-facing body
    pub fn to_body(&self) -> ErrorBody {
        let message = self.to_string();
        match self {
            PolicyError::SectionsNotAllowed { page_type } => ErrorBody {
                code: self.code(),
                message,
                details: json!({
                    "page_type": page_type,
                    "allowed_sections": Value::Null,
                }),
                help: Help {
                    suggestion: format!(
                        "Page '{}' is managed through its translations (alias and SEO metadata) only",
                        page_type
                    ),
                    examples: None,
                    actions: Some(vec![format!(
                        "PUT /pages/{}/translations/{{language}} to update SEO data",
                        page_type
                    )]),
                },
            },
            PolicyError::InvalidSectionType {
                page_type,
                attempted,
                allowed_sections,
                available_sections,
            } => ErrorBody {
                code: self.code(),
                message,
                details: json!({
                    "page_type": page_type,
                    "attempted_section_type": attempted,
                    "allowed_sections": allowed_sections,
                    "available_sections": available_sections,
                }),
                help: Help {
                    suggestion: if available_sections.is_empty() {
                        format!(
                            "Every section type allowed on '{}' is already in use; update an existing section instead",
                            page_type
                        )
                    } else {
                        format!(
                            "Use one of the section types still available on '{}': {}",
                            page_type,
                            join_types(available_sections)
                        )
                    },
                    examples: Some(
                        available_sections
                            .iter()
                            .map(|t| format!("{{\"section_type\": \"{}\"}}", t))
                            .collect(),
                    ),
                    actions: None,
                },
            },
            PolicyError::DuplicateSection {
                page_type,
                section_type,
                existing_section_id,
            } => ErrorBody {
                code: self.code(),
                message,
                details: json!({
                    "page_type": page_type,
                    "section_type": section_type,
                    "existing_section_id": existing_section_id,
                }),
                help: Help {
                    suggestion: format!(
                        "A page may hold only one '{}' section; update the existing one instead of creating another",
                        section_type
                    ),
                    examples: None,
                    actions: Some(vec![
                        format!(
                            "PUT /sections/{}/translations/{{language}} to update its content",
                            existing_section_id
                        ),
                        format!(
                            "DELETE /sections/{} first to replace it",
                            existing_section_id
                        ),
                    ]),
                },
            },
            PolicyError::ContentValidationFailed(report) => ErrorBody {
                code: self.code(),
                message,
                details: serde_json::to_value(report.as_ref()).unwrap_or(Value::Null),
                help: Help {
                    suggestion: "Fix every field listed in details.errors and resend the whole payload; details.example shows a valid payload".to_string(),
                    examples: None,
                    actions: Some(
                        report
                            .errors
                            .iter()
                            .map(|violation| format!("{}: {}", violation.field, violation.message))
                            .collect(),
                    ),
                },
            },
        }
    }
}

fn join_types(types: &[SectionType]) -> String {
    types
        .iter()
        .map(SectionType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_status() {
        let not_allowed = PolicyError::SectionsNotAllowed {
            page_type: PageType::Blog,
        };
        assert_eq!(not_allowed.code(), "SECTIONS_NOT_ALLOWED");
        assert_eq!(not_allowed.status_code(), 400);

        let duplicate = PolicyError::DuplicateSection {
            page_type: PageType::About,
            section_type: SectionType::Hero,
            existing_section_id: Uuid::nil(),
        };
        assert_eq!(duplicate.code(), "DUPLICATE_SECTION");
        assert_eq!(duplicate.status_code(), 409);
        assert!(!duplicate.is_retryable());
    }

    #[test]
    fn test_invalid_type_body() {
        let err = PolicyError::InvalidSectionType {
            page_type: PageType::Contact,
            attempted: SectionType::Team,
            allowed_sections: vec![SectionType::Hero, SectionType::ContactInfo],
            available_sections: vec![SectionType::ContactInfo],
        };
        let body = serde_json::to_value(err.to_body()).unwrap();
        assert_eq!(body["code"], "INVALID_SECTION_TYPE");
        assert_eq!(body["details"]["allowed_sections"], json!(["hero", "contact-info"]));
        assert_eq!(body["details"]["available_sections"], json!(["contact-info"]));
        assert!(body["help"]["suggestion"]
            .as_str()
            .unwrap()
            .contains("contact-info"));
        assert!(body["help"].get("actions").is_none());
    }

    #[test]
    fn test_duplicate_body_points_at_existing_section() {
        let id = Uuid::new_v4();
        let err = PolicyError::DuplicateSection {
            page_type: PageType::About,
            section_type: SectionType::Hero,
            existing_section_id: id,
        };
        let body = err.to_body();
        assert_eq!(body.details["existing_section_id"], json!(id));
        assert!(body.help.actions.unwrap()[0].contains(&id.to_string()));
    }
}
