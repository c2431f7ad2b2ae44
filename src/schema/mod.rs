//! Section Schema Registry
//!
//! Single source of truth for what each section type's content looks like.
//!
//! # Design Principles
//!
//! - One table entry per section type (schema, example, description,
//!   field descriptions, messages)
//! - Pure lookups, no side effects
//! - Unknown types fall back to a generic title/description schema
//! - Explicitly constructed and shared by `Arc`, never a process global

pub mod catalog;
mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{SectionSchemaRegistry, SectionSpec};
pub use types::{join_path, schema_path, FieldDef, FieldType, Schema, StringFormat};
