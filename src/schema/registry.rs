//! Section schema registry
//!
//! One `SectionSpec` per section type: schema, example payload, description,
//! per-field descriptions and section-specific error messages. The registry
//! is an ordinary value; build it once and share it by `Arc`.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::catalog;
use super::errors::{SchemaError, SchemaResult};
use super::types::{schema_path, Schema};
use crate::content::SectionType;

/// Schema plus the metadata used to enrich validation reports
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub schema: Schema,
    pub example: Option<Value>,
    pub description: String,
    /// Keyed by schema path (`members.photo.url`)
    pub field_descriptions: HashMap<String, String>,
    /// Keyed by schema path
    pub messages: HashMap<String, String>,
}

impl SectionSpec {
    pub fn new(description: impl Into<String>, schema: Schema) -> Self {
        Self {
            schema,
            example: None,
            description: description.into(),
            field_descriptions: HashMap::new(),
            messages: HashMap::new(),
        }
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Attach a description to a field path
    pub fn describe(mut self, path: &str, text: &str) -> Self {
        self.field_descriptions.insert(path.to_string(), text.to_string());
        self
    }

    /// Attach a section-specific error message to a field path
    pub fn message(mut self, path: &str, text: &str) -> Self {
        self.messages.insert(path.to_string(), text.to_string());
        self
    }
}

/// Lookup table from section type to its spec
#[derive(Debug, Clone)]
pub struct SectionSchemaRegistry {
    specs: HashMap<SectionType, SectionSpec>,
    generic: Schema,
}

impl Default for SectionSchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSchemaRegistry {
    /// Empty registry; every lookup falls back to the generic schema
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
            generic: Schema::generic(),
        }
    }

    /// Registry holding the built-in section catalog
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (section_type, spec) in catalog::builtin_specs() {
            registry.specs.insert(section_type, spec);
        }
        registry
    }

    /// Registers a spec for a section type.
    ///
    /// Entries are immutable once registered.
    pub fn register(&mut self, section_type: SectionType, spec: SectionSpec) -> SchemaResult<()> {
        if self.specs.contains_key(&section_type) {
            return Err(SchemaError::AlreadyRegistered(section_type));
        }
        self.specs.insert(section_type, spec);
        Ok(())
    }

    pub fn spec_for(&self, section_type: SectionType) -> SchemaResult<&SectionSpec> {
        self.specs
            .get(&section_type)
            .ok_or(SchemaError::UnknownSectionType(section_type))
    }

    pub fn schema_for(&self, section_type: SectionType) -> SchemaResult<&Schema> {
        self.spec_for(section_type).map(|spec| &spec.schema)
    }

    /// Registered schema, or the generic one. The flag is true on fallback.
    pub fn schema_or_generic(&self, section_type: SectionType) -> (&Schema, bool) {
        match self.schema_for(section_type) {
            Ok(schema) => (schema, false),
            Err(_) => (&self.generic, true),
        }
    }

    pub fn example_for(&self, section_type: SectionType) -> Option<&Value> {
        self.specs
            .get(&section_type)
            .and_then(|spec| spec.example.as_ref())
    }

    pub fn description_for(&self, section_type: SectionType) -> String {
        match self.specs.get(&section_type) {
            Some(spec) => spec.description.clone(),
            None => format!(
                "Content section of type '{}' with a title and a description",
                section_type
            ),
        }
    }

    /// Descriptions for the given field paths. Never fails.
    pub fn field_descriptions_for(
        &self,
        section_type: SectionType,
        fields: &[&str],
    ) -> BTreeMap<String, String> {
        let registered = self.specs.get(&section_type).map(|spec| &spec.field_descriptions);
        fields
            .iter()
            .map(|field| {
                let description = registered
                    .and_then(|descriptions| descriptions.get(&schema_path(field)))
                    .cloned()
                    .unwrap_or_else(|| format!("Field '{}' for {} section", field, section_type));
                (field.to_string(), description)
            })
            .collect()
    }

    /// Section-specific message for a field path, if one is registered
    pub fn message_for(&self, section_type: SectionType, path: &str) -> Option<&str> {
        self.specs
            .get(&section_type)
            .and_then(|spec| spec.messages.get(&schema_path(path)))
            .map(String::as_str)
    }

    /// Registered types in declaration order
    pub fn registered_types(&self) -> Vec<SectionType> {
        SectionType::ALL
            .iter()
            .copied()
            .filter(|t| self.specs.contains_key(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{FieldDef, FieldType};
    use serde_json::json;

    fn custom_spec() -> SectionSpec {
        SectionSpec::new(
            "Single banner line",
            Schema::new(vec![FieldDef::required("text", FieldType::text(80))]),
        )
        .with_example(json!({"text": "Season tickets on sale"}))
        .describe("text", "Banner text")
        .message("text", "The banner needs a short line of text")
    }

    #[test]
    fn test_unknown_type_is_error() {
        let registry = SectionSchemaRegistry::new();
        assert_eq!(
            registry.schema_for(SectionType::Hero).unwrap_err(),
            SchemaError::UnknownSectionType(SectionType::Hero)
        );
    }

    #[test]
    fn test_fallback_to_generic() {
        let registry = SectionSchemaRegistry::standard();
        let (schema, generic) = registry.schema_or_generic(SectionType::Newsletter);
        assert!(generic);
        assert_eq!(schema, &Schema::generic());

        let (_, generic) = registry.schema_or_generic(SectionType::Hero);
        assert!(!generic);
    }

    #[test]
    fn test_register_is_immutable() {
        let mut registry = SectionSchemaRegistry::new();
        registry.register(SectionType::Newsletter, custom_spec()).unwrap();
        assert_eq!(
            registry.register(SectionType::Newsletter, custom_spec()),
            Err(SchemaError::AlreadyRegistered(SectionType::Newsletter))
        );
    }

    #[test]
    fn test_field_descriptions_fall_back() {
        let mut registry = SectionSchemaRegistry::new();
        registry.register(SectionType::Newsletter, custom_spec()).unwrap();

        let descriptions =
            registry.field_descriptions_for(SectionType::Newsletter, &["text", "footer"]);
        assert_eq!(descriptions["text"], "Banner text");
        assert_eq!(descriptions["footer"], "Field 'footer' for newsletter section");
    }

    #[test]
    fn test_lookup_ignores_array_indices() {
        let registry = SectionSchemaRegistry::standard();
        assert!(registry
            .message_for(SectionType::Team, "members.3.photo.url")
            .is_some());
        assert!(registry
            .field_descriptions_for(SectionType::Team, &["members.3.name"])["members.3.name"]
            .starts_with("Full name"));
    }

    #[test]
    fn test_description_never_fails() {
        let registry = SectionSchemaRegistry::new();
        assert!(registry
            .description_for(SectionType::Hero)
            .contains("'hero'"));
        assert!(registry.example_for(SectionType::Hero).is_none());
    }

    #[test]
    fn test_standard_registers_all_but_newsletter() {
        let registry = SectionSchemaRegistry::standard();
        let types = registry.registered_types();
        assert_eq!(types.len(), SectionType::ALL.len() - 1);
        assert!(!types.contains(&SectionType::Newsletter));
    }
}
