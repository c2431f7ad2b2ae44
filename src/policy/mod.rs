//! # Page-Section Policy Engine
//!
//! Enforces which section types may exist on a page, and how many.
//!
//! ## Rules
//! - A page type declares a fixed allow-list, or takes no sections at all
//! - Section types are singletons per page, except for the explicit
//!   repeatable (page type, section type) pairs
//! - Content writes must pass the section's schema

mod engine;
mod errors;
mod fixed_sections;

pub use engine::{ExistingSection, PolicyEngine};
pub use errors::{ErrorBody, Help, PolicyError, PolicyResult};
pub use fixed_sections::{fixed_sections, is_repeatable, REPEATABLE_SECTIONS};
