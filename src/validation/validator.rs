//! Section content validator
//!
//! Validation semantics:
//! - Every violation is collected in one pass (no fail-fast)
//! - A missing object is one violation; its children are not reported
//! - `null` on a required field counts as missing; on an optional field
//!   it counts as absent
//! - Undeclared fields are ignored
//! - The content is never mutated

use serde_json::{Map, Value};
use std::sync::Arc;

use super::report::{
    ErrorCategory, ExamplePayload, FieldViolation, SuppliedValue, ValidationOutcome,
    ValidationReport,
};
use crate::content::SectionType;
use crate::schema::{join_path, FieldDef, FieldType, SectionSchemaRegistry};

/// Path reported when the payload itself is not an object
pub const ROOT_PATH: &str = "$root";

/// Validates section payloads against the registry.
///
/// Cheap to clone; the registry is shared.
#[derive(Debug, Clone)]
pub struct SectionValidator {
    registry: Arc<SectionSchemaRegistry>,
}

impl SectionValidator {
    pub fn new(registry: Arc<SectionSchemaRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SectionSchemaRegistry {
        &self.registry
    }

    /// Validates `content` for `section_type`.
    ///
    /// Unregistered section types are checked against the generic
    /// title/description schema instead of failing.
    pub fn validate(&self, section_type: SectionType, content: &Value) -> ValidationOutcome {
        let (schema, generic) = self.registry.schema_or_generic(section_type);
        if generic {
            tracing::debug!(%section_type, "no registered schema, using generic schema");
        }

        let example = match self.registry.example_for(section_type) {
            Some(example) => Some(example.clone()),
            None if generic => Some(generic_example()),
            None => None,
        };

        let mut walk = Walk {
            section_type,
            registry: &self.registry,
            example: example.as_ref(),
            violations: Vec::new(),
        };

        match content.as_object() {
            Some(obj) => walk.validate_object(obj, &schema.fields, ""),
            None => walk.push(
                ROOT_PATH,
                ErrorCategory::InvalidFormat,
                "object".to_string(),
                SuppliedValue::Value(content.clone()),
                format!(
                    "{} content must be a JSON object, got {}",
                    section_type,
                    json_type_name(content)
                ),
            ),
        }

        if walk.violations.is_empty() {
            tracing::debug!(%section_type, "content valid");
            return ValidationOutcome::Valid;
        }

        let violations = walk.violations;
        let (required_fields, optional_fields) = schema.field_paths();
        let violated: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        let field_descriptions = self
            .registry
            .field_descriptions_for(section_type, &violated);

        let report = ValidationReport {
            section_type,
            section_description: self.registry.description_for(section_type),
            errors: violations,
            required_fields,
            optional_fields,
            field_descriptions,
            example: example.map(|payload| ExamplePayload {
                caption: if generic {
                    format!(
                        "Section type '{}' has no dedicated schema; any content with a title and a description is accepted",
                        section_type
                    )
                } else {
                    format!(
                        "Example of valid content for a '{}' section; copy it and replace the values",
                        section_type
                    )
                },
                payload,
            }),
            generic_schema: generic,
        };
        tracing::debug!(
            %section_type,
            missing = report.count(ErrorCategory::Missing),
            summary = %report.summary(),
            "content invalid"
        );
        ValidationOutcome::Invalid(report)
    }
}

/// State of one validation pass
struct Walk<'a> {
    section_type: SectionType,
    registry: &'a SectionSchemaRegistry,
    example: Option<&'a Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> Walk<'a> {
    /// Validates an object against field definitions.
    fn validate_object(&mut self, obj: &Map<String, Value>, fields: &[FieldDef], path_prefix: &str) {
        for field in fields {
            let field_path = join_path(path_prefix, &field.name);

            match obj.get(&field.name) {
                Some(Value::Null) | None if !field.required => {}
                Some(Value::Null) => self.missing(&field_path, &field.field_type, SuppliedValue::Value(Value::Null)),
                None => self.missing(&field_path, &field.field_type, SuppliedValue::Undefined),
                Some(value) => self.validate_value(value, &field.field_type, &field_path),
            }
        }
    }

    /// Validates a value against a field type.
    fn validate_value(&mut self, value: &Value, expected: &FieldType, field_path: &str) {
        match expected {
            FieldType::Text {
                min_len,
                max_len,
                format,
            } => {
                let Some(text) = value.as_str() else {
                    return self.type_error(value, expected, field_path);
                };
                let len = text.chars().count();
                if *min_len > 0 && text.trim().is_empty() {
                    self.invalid_value(value, expected, field_path, format!("'{}' must not be empty", field_path));
                } else if len < *min_len {
                    self.invalid_value(
                        value,
                        expected,
                        field_path,
                        format!("'{}' must be at least {} characters, got {}", field_path, min_len, len),
                    );
                } else if let Some(max) = max_len.filter(|max| len > *max) {
                    self.invalid_value(
                        value,
                        expected,
                        field_path,
                        format!("'{}' must be at most {} characters, got {}", field_path, max, len),
                    );
                } else if let Some(format) = format.filter(|f| !f.matches(text)) {
                    self.push(
                        field_path,
                        ErrorCategory::InvalidFormat,
                        expected.describe(),
                        SuppliedValue::Value(value.clone()),
                        format!("'{}' must be a {}", field_path, format.describe()),
                    );
                }
            }
            FieldType::Integer { min, max } => {
                let Some(number) = as_whole_number(value) else {
                    return self.type_error(value, expected, field_path);
                };
                if min.is_some_and(|lo| number < lo) || max.is_some_and(|hi| number > hi) {
                    self.invalid_value(
                        value,
                        expected,
                        field_path,
                        format!("'{}' must be {}, got {}", field_path, expected.describe(), number),
                    );
                }
            }
            FieldType::Number { min, max } => {
                let Some(number) = value.as_f64() else {
                    return self.type_error(value, expected, field_path);
                };
                if min.is_some_and(|lo| number < lo) || max.is_some_and(|hi| number > hi) {
                    self.invalid_value(
                        value,
                        expected,
                        field_path,
                        format!("'{}' must be {}, got {}", field_path, expected.describe(), number),
                    );
                }
            }
            FieldType::Bool => {
                if !value.is_boolean() {
                    self.type_error(value, expected, field_path);
                }
            }
            FieldType::Object { fields } => {
                let Some(obj) = value.as_object() else {
                    return self.type_error(value, expected, field_path);
                };
                self.validate_object(obj, fields, field_path);
            }
            FieldType::Array {
                element,
                min_items,
                max_items,
            } => {
                let Some(items) = value.as_array() else {
                    return self.type_error(value, expected, field_path);
                };
                let count = items.len();
                if count < *min_items || max_items.is_some_and(|max| count > max) {
                    self.invalid_value(
                        value,
                        expected,
                        field_path,
                        format!("'{}' must be an {}, got {}", field_path, expected.describe(), count),
                    );
                }

                // Elements are checked even when the count is wrong.
                for (i, item) in items.iter().enumerate() {
                    let item_path = join_path(field_path, &i.to_string());
                    self.validate_value(item, element, &item_path);
                }
            }
        }
    }

    fn missing(&mut self, field_path: &str, expected: &FieldType, supplied: SuppliedValue) {
        let generic = format!("'{}' is required for {} sections", field_path, self.section_type);
        self.push(field_path, ErrorCategory::Missing, expected.describe(), supplied, generic);
    }

    fn type_error(&mut self, value: &Value, expected: &FieldType, field_path: &str) {
        let generic = format!(
            "'{}' must be a {}, got {}",
            field_path,
            expected.type_name(),
            json_type_name(value)
        );
        self.push(
            field_path,
            ErrorCategory::InvalidFormat,
            expected.describe(),
            SuppliedValue::Value(value.clone()),
            generic,
        );
    }

    fn invalid_value(&mut self, value: &Value, expected: &FieldType, field_path: &str, generic: String) {
        self.push(
            field_path,
            ErrorCategory::InvalidValue,
            expected.describe(),
            SuppliedValue::Value(value.clone()),
            generic,
        );
    }

    fn push(
        &mut self,
        field_path: &str,
        category: ErrorCategory,
        expected: String,
        current_value: SuppliedValue,
        generic_message: String,
    ) {
        let message = self
            .registry
            .message_for(self.section_type, field_path)
            .map(str::to_string)
            .unwrap_or(generic_message);
        let example_value = if field_path == ROOT_PATH {
            None
        } else {
            self.example.and_then(|example| example_at(example, field_path)).cloned()
        };

        self.violations.push(FieldViolation {
            field: field_path.to_string(),
            category,
            message,
            expected,
            example_value,
            current_value,
        });
    }
}

/// Integer view of a JSON number; whole floats such as `3.0` are accepted
fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

/// Looks up the example value at a dotted path.
///
/// Array indices past the end of the example fall back to its first element.
pub fn example_at<'v>(example: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = example;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index).or_else(|| items.first())?
            }
            _ => return None,
        };
    }
    Some(current)
}

fn generic_example() -> Value {
    serde_json::json!({
        "title": "Section title",
        "description": "Section description"
    })
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> SectionValidator {
        SectionValidator::new(Arc::new(SectionSchemaRegistry::standard()))
    }

    fn hero_example() -> Value {
        SectionSchemaRegistry::standard()
            .example_for(SectionType::Hero)
            .cloned()
            .unwrap()
    }

    fn report(outcome: ValidationOutcome) -> ValidationReport {
        outcome.into_result().unwrap_err()
    }

    #[test]
    fn test_example_is_valid() {
        assert!(validator().validate(SectionType::Hero, &hero_example()).is_valid());
    }

    #[test]
    fn test_missing_nested_field() {
        let mut content = hero_example();
        content["background_image"]
            .as_object_mut()
            .unwrap()
            .remove("url");

        let report = report(validator().validate(SectionType::Hero, &content));
        assert_eq!(report.error_count(), 1);

        let violation = &report.errors[0];
        assert_eq!(violation.field, "background_image.url");
        assert_eq!(violation.category, ErrorCategory::Missing);
        assert_eq!(violation.current_value, SuppliedValue::Undefined);
        assert_eq!(
            violation.example_value,
            Some(json!("https://cdn.example.com/images/hero-stadium.jpg"))
        );
        assert!(violation.message.contains("background image URL"));
    }

    #[test]
    fn test_missing_object_does_not_cascade() {
        let mut content = hero_example();
        content.as_object_mut().unwrap().remove("background_image");

        let report = report(validator().validate(SectionType::Hero, &content));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].field, "background_image");
    }

    #[test]
    fn test_collects_all_violations() {
        let content = json!({
            "title": "",
            "description": 42,
            "background_image": { "url": "ftp://example.com/a.jpg" },
            "overlay": { "color": "red", "opacity": 1.5 }
        });

        let report = report(validator().validate(SectionType::Hero, &content));
        let categories: Vec<(&str, ErrorCategory)> = report
            .errors
            .iter()
            .map(|v| (v.field.as_str(), v.category))
            .collect();
        assert_eq!(
            categories,
            vec![
                ("title", ErrorCategory::InvalidValue),
                ("description", ErrorCategory::InvalidFormat),
                ("background_image.url", ErrorCategory::InvalidFormat),
                ("overlay.color", ErrorCategory::InvalidFormat),
                ("overlay.opacity", ErrorCategory::InvalidValue),
            ]
        );
    }

    #[test]
    fn test_null_required_is_missing_null_optional_is_absent() {
        let mut content = hero_example();
        content["title"] = Value::Null;
        content["subtitle"] = Value::Null;

        let report = report(validator().validate(SectionType::Hero, &content));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].category, ErrorCategory::Missing);
        assert_eq!(report.errors[0].current_value, SuppliedValue::Value(Value::Null));
    }

    #[test]
    fn test_non_object_root() {
        let report = report(validator().validate(SectionType::Hero, &json!(["a"])));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].field, ROOT_PATH);
        assert_eq!(report.errors[0].category, ErrorCategory::InvalidFormat);
        assert!(report.errors[0].example_value.is_none());
    }

    #[test]
    fn test_report_metadata() {
        let report = report(validator().validate(SectionType::Hero, &json!({})));
        assert_eq!(report.required_fields, vec![
            "title",
            "description",
            "background_image",
            "background_image.url"
        ]);
        assert!(report.optional_fields.contains(&"overlay.opacity".to_string()));
        assert_eq!(report.example.as_ref().unwrap().payload, hero_example());
        assert_eq!(
            report.field_descriptions["title"],
            "Main headline shown over the background image"
        );
        assert!(!report.generic_schema);
    }

    #[test]
    fn test_generic_fallback() {
        let v = validator();
        assert!(v
            .validate(
                SectionType::Newsletter,
                &json!({"title": "Stay in the loop", "description": "Monthly club news."})
            )
            .is_valid());

        let report = report(v.validate(SectionType::Newsletter, &json!({"title": "x".repeat(101)})));
        assert!(report.generic_schema);
        assert_eq!(report.count(ErrorCategory::InvalidValue), 1);
        assert_eq!(report.count(ErrorCategory::Missing), 1);
        assert_eq!(report.errors[1].example_value, Some(json!("Section description")));
    }

    #[test]
    fn test_integer_rules() {
        let mut content = SectionSchemaRegistry::standard()
            .example_for(SectionType::Standings)
            .cloned()
            .unwrap();
        content["entries"][0]["position"] = json!(0);
        content["entries"][1]["played"] = json!(9.5);
        content["entries"][1]["won"] = json!(7.0);

        let report = report(validator().validate(SectionType::Standings, &content));
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.errors[0].field, "entries.0.position");
        assert_eq!(report.errors[0].category, ErrorCategory::InvalidValue);
        assert_eq!(report.errors[1].field, "entries.1.played");
        assert_eq!(report.errors[1].category, ErrorCategory::InvalidFormat);
    }

    #[test]
    fn test_example_at() {
        let example = json!({"members": [{"name": "a"}, {"name": "b"}]});
        assert_eq!(example_at(&example, "members.1.name"), Some(&json!("b")));
        assert_eq!(example_at(&example, "members.7.name"), Some(&json!("a")));
        assert_eq!(example_at(&example, "members.x"), None);
        assert_eq!(example_at(&example, "title"), None);
    }
}
