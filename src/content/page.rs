//! Pages and their localized alias/SEO data

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::PageType;
use super::{ModelError, ModelResult};
use crate::schema::StringFormat;

/// Alias stored for every `home` translation. The home page is served at the
/// site root, so it never owns a public slug and is skipped by uniqueness checks.
pub const HOME_ALIAS_PLACEHOLDER: &str = "__home__";

const MAX_ALIAS_LEN: usize = 120;
const MAX_SEO_TITLE_LEN: usize = 70;
const MAX_SEO_DESCRIPTION_LEN: usize = 160;

static ALIAS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("static alias pattern"));

/// A fixed site page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub page_type: PageType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Create a page with a fresh id
    pub fn new(page_type: PageType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            page_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this page type suppresses public slugs
    pub fn uses_alias_placeholder(&self) -> bool {
        self.page_type == PageType::Home
    }
}

/// Twitter card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    #[default]
    Summary,
    SummaryLargeImage,
}

/// SEO metadata attached to a page translation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default)]
    pub twitter_card: TwitterCard,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
}

impl SeoMetadata {
    /// Checks length limits and image URL shapes
    pub fn validate(&self) -> ModelResult<()> {
        check_len("title", self.title.as_deref(), MAX_SEO_TITLE_LEN)?;
        check_len("og_title", self.og_title.as_deref(), MAX_SEO_TITLE_LEN)?;
        check_len("twitter_title", self.twitter_title.as_deref(), MAX_SEO_TITLE_LEN)?;
        check_len("description", self.description.as_deref(), MAX_SEO_DESCRIPTION_LEN)?;
        check_len(
            "og_description",
            self.og_description.as_deref(),
            MAX_SEO_DESCRIPTION_LEN,
        )?;
        check_len(
            "twitter_description",
            self.twitter_description.as_deref(),
            MAX_SEO_DESCRIPTION_LEN,
        )?;
        check_url("og_image", self.og_image.as_deref())?;
        check_url("twitter_image", self.twitter_image.as_deref())?;

        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ModelError::InvalidSeo {
                field: "keywords".into(),
                reason: "keywords must not be blank".into(),
            });
        }
        Ok(())
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> ModelResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(ModelError::InvalidSeo {
            field: field.into(),
            reason: format!("must be at most {} characters", max),
        }),
        _ => Ok(()),
    }
}

fn check_url(field: &str, value: Option<&str>) -> ModelResult<()> {
    match value {
        Some(v) if !StringFormat::Url.matches(v) => Err(ModelError::InvalidSeo {
            field: field.into(),
            reason: "must be an absolute http(s) URL".into(),
        }),
        _ => Ok(()),
    }
}

/// Per-language alias and SEO data for a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTranslation {
    pub page_id: Uuid,
    pub language: String,
    pub alias: String,
    pub seo: SeoMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageTranslation {
    /// Whether this translation carries the reserved home placeholder
    pub fn is_placeholder(&self) -> bool {
        self.alias == HOME_ALIAS_PLACEHOLDER
    }

    /// Case-insensitive key used for uniqueness
    pub fn alias_key(&self) -> String {
        alias_key(&self.alias)
    }
}

/// Lowercased comparison key for an alias
pub fn alias_key(alias: &str) -> String {
    alias.to_lowercase()
}

/// Trims and checks an alias, returning the stored form
pub fn normalize_alias(raw: &str) -> ModelResult<String> {
    let alias = raw.trim();
    if alias.is_empty() {
        return Err(ModelError::InvalidAlias {
            alias: raw.to_string(),
            reason: "alias must not be empty".into(),
        });
    }
    if alias.chars().count() > MAX_ALIAS_LEN {
        return Err(ModelError::InvalidAlias {
            alias: raw.to_string(),
            reason: format!("alias must be at most {} characters", MAX_ALIAS_LEN),
        });
    }
    if alias.eq_ignore_ascii_case(HOME_ALIAS_PLACEHOLDER) || !ALIAS_PATTERN.is_match(alias) {
        return Err(ModelError::InvalidAlias {
            alias: raw.to_string(),
            reason: "alias may contain letters, digits and single hyphens only".into(),
        });
    }
    Ok(alias.to_string())
}
