//! Page and section type identifiers
//!
//! Both enums serialize to their kebab-case ids (`how-it-works`,
//! `sports-cards`) and parse back from the same strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Fixed site page identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    Home,
    About,
    HowItWorks,
    Contact,
    Faq,
    Sports,
    News,
    Blog,
    PrivacyPolicy,
    TermsOfService,
}

impl PageType {
    /// Every page type, in initialization order
    pub const ALL: [PageType; 10] = [
        PageType::Home,
        PageType::About,
        PageType::HowItWorks,
        PageType::Contact,
        PageType::Faq,
        PageType::Sports,
        PageType::News,
        PageType::Blog,
        PageType::PrivacyPolicy,
        PageType::TermsOfService,
    ];

    /// Returns the string id
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::About => "about",
            PageType::HowItWorks => "how-it-works",
            PageType::Contact => "contact",
            PageType::Faq => "faq",
            PageType::Sports => "sports",
            PageType::News => "news",
            PageType::Blog => "blog",
            PageType::PrivacyPolicy => "privacy-policy",
            PageType::TermsOfService => "terms-of-service",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownPageType(s.to_string()))
    }
}

/// Category of content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Hero,
    Mission,
    Team,
    SportsCards,
    Statistics,
    Features,
    Standings,
    Timeline,
    FaqList,
    ContactInfo,
    CallToAction,
    Testimonials,
    Partners,
    Steps,
    RichText,
    Newsletter,
}

impl SectionType {
    pub const ALL: [SectionType; 16] = [
        SectionType::Hero,
        SectionType::Mission,
        SectionType::Team,
        SectionType::SportsCards,
        SectionType::Statistics,
        SectionType::Features,
        SectionType::Standings,
        SectionType::Timeline,
        SectionType::FaqList,
        SectionType::ContactInfo,
        SectionType::CallToAction,
        SectionType::Testimonials,
        SectionType::Partners,
        SectionType::Steps,
        SectionType::RichText,
        SectionType::Newsletter,
    ];

    /// Returns the string id
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Mission => "mission",
            SectionType::Team => "team",
            SectionType::SportsCards => "sports-cards",
            SectionType::Statistics => "statistics",
            SectionType::Features => "features",
            SectionType::Standings => "standings",
            SectionType::Timeline => "timeline",
            SectionType::FaqList => "faq-list",
            SectionType::ContactInfo => "contact-info",
            SectionType::CallToAction => "call-to-action",
            SectionType::Testimonials => "testimonials",
            SectionType::Partners => "partners",
            SectionType::Steps => "steps",
            SectionType::RichText => "rich-text",
            SectionType::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSectionType(s.to_string()))
    }
}
