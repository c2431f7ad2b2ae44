//! # Content Store
//!
//! Persistence abstraction for pages, sections and their translations.
//!
//! The store owns the authoritative constraints:
//! - one page per page type
//! - one section per (page, section type) unless the pair is repeatable
//! - one translation per (page, language) and per (section, language)
//! - page aliases unique per language, case-insensitively, except the
//!   home placeholder
//!
//! Deleting a section removes its translations.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryContentStore;

use uuid::Uuid;

use crate::content::{Page, PageTranslation, PageType, Section, SectionTranslation};

/// Trait for content persistence
pub trait ContentStore: Send + Sync {
    /// Insert the page for `page_type` unless one exists.
    ///
    /// Returns the stored page and whether it was created.
    fn ensure_page(&self, page_type: PageType) -> StoreResult<(Page, bool)>;

    fn page(&self, page_type: PageType) -> StoreResult<Option<Page>>;

    /// All pages, in page type declaration order
    fn pages(&self) -> StoreResult<Vec<Page>>;

    /// Insert or replace the (page, language) translation.
    ///
    /// `created_at` of an existing row is preserved.
    fn upsert_page_translation(&self, translation: PageTranslation)
        -> StoreResult<PageTranslation>;

    fn page_translation(&self, page_id: Uuid, language: &str)
        -> StoreResult<Option<PageTranslation>>;

    /// Insert a section, enforcing (page, section type) uniqueness
    fn insert_section(&self, section: &Section) -> StoreResult<()>;

    fn section(&self, section_id: Uuid) -> StoreResult<Option<Section>>;

    /// Sections of a page ordered by order index, then creation time
    fn sections_for_page(&self, page_id: Uuid) -> StoreResult<Vec<Section>>;

    /// Apply new order indexes in one step
    fn set_section_orders(&self, orders: &[(Uuid, i32)]) -> StoreResult<()>;

    /// Delete a section and its translations.
    ///
    /// Returns the number of translations removed.
    fn delete_section(&self, section_id: Uuid) -> StoreResult<usize>;

    /// Insert or replace the (section, language) translation
    fn upsert_section_translation(
        &self,
        translation: SectionTranslation,
    ) -> StoreResult<SectionTranslation>;

    fn section_translation(
        &self,
        section_id: Uuid,
        language: &str,
    ) -> StoreResult<Option<SectionTranslation>>;
}
