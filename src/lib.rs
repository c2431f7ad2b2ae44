//! pagesmith - multi-language page content core
//!
//! Fixed site pages own typed content sections, each carrying one payload
//! per language. This crate provides:
//!
//! - `schema`: section schema registry (schemas, examples, descriptions)
//! - `validation`: example-driven, field-level payload validation
//! - `policy`: fixed-section allow-lists and placement rules
//! - `notify`: synchronous fan-out of section updates (email subscriber)
//! - `content` / `store` / `service`: data model, persistence and write path
//! - `config` / `observability` / `cli`: the ambient pieces of the binary

pub mod cli;
pub mod config;
pub mod content;
pub mod notify;
pub mod observability;
pub mod policy;
pub mod schema;
pub mod service;
pub mod store;
pub mod validation;
