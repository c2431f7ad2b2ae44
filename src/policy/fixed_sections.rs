//! Fixed sections per page type
//!
//! Each page type declares exactly which section types it may hold.
//! `None` means the page carries SEO data only.

use crate::content::{PageType, SectionType};

use SectionType::*;

const HOME: &[SectionType] = &[
    Hero,
    Features,
    Statistics,
    Testimonials,
    Partners,
    CallToAction,
    Newsletter,
];
const ABOUT: &[SectionType] = &[Hero, Mission, Team, Statistics, Timeline, Partners];
const HOW_IT_WORKS: &[SectionType] = &[Hero, Steps, Features, FaqList, CallToAction];
const CONTACT: &[SectionType] = &[Hero, ContactInfo];
const FAQ: &[SectionType] = &[Hero, FaqList];
const SPORTS: &[SectionType] = &[Hero, SportsCards, Standings, CallToAction];
const NEWS: &[SectionType] = &[Hero, Timeline];
const LEGAL: &[SectionType] = &[RichText];

/// Section types that may appear more than once, and only on the paired page
pub const REPEATABLE_SECTIONS: &[(PageType, SectionType)] = &[
    (PageType::Sports, Standings),
    (PageType::News, Timeline),
];

/// Allow-list for a page type, `None` when the page takes no sections
pub fn fixed_sections(page_type: PageType) -> Option<&'static [SectionType]> {
    match page_type {
        PageType::Home => Some(HOME),
        PageType::About => Some(ABOUT),
        PageType::HowItWorks => Some(HOW_IT_WORKS),
        PageType::Contact => Some(CONTACT),
        PageType::Faq => Some(FAQ),
        PageType::Sports => Some(SPORTS),
        PageType::News => Some(NEWS),
        PageType::Blog => None,
        PageType::PrivacyPolicy | PageType::TermsOfService => Some(LEGAL),
    }
}

pub fn is_repeatable(page_type: PageType, section_type: SectionType) -> bool {
    REPEATABLE_SECTIONS.contains(&(page_type, section_type))
}
