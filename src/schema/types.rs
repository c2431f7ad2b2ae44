//! Section schema vocabulary
//!
//! Supported field types:
//! - text: UTF-8 string with length bounds and an optional format
//! - integer: 64-bit signed integer with optional bounds
//! - number: 64-bit float with optional bounds (percentages, opacity)
//! - bool
//! - object: nested fields, declaration order preserved
//! - array: element type plus item-count bounds

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("static email pattern")
});

static HEX_COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static hex color pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{5,19}$").expect("static phone pattern"));

/// Format constraint on a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringFormat {
    /// Absolute http(s) URL
    Url,
    Email,
    /// `#RRGGBB`
    HexColor,
    /// `YYYY-MM-DD`, must be a real calendar date
    IsoDate,
    /// Digits, spaces, parentheses and dashes, optional leading `+`
    Phone,
}

impl StringFormat {
    /// Returns whether `value` satisfies the format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StringFormat::Url => match url::Url::parse(value) {
                Ok(parsed) => {
                    matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
                }
                Err(_) => false,
            },
            StringFormat::Email => EMAIL_PATTERN.is_match(value),
            StringFormat::HexColor => HEX_COLOR_PATTERN.is_match(value),
            StringFormat::IsoDate => {
                value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
            }
            StringFormat::Phone => PHONE_PATTERN.is_match(value),
        }
    }

    /// Human description used in error reports
    pub fn describe(&self) -> &'static str {
        match self {
            StringFormat::Url => "URL string starting with http:// or https://",
            StringFormat::Email => "email address string",
            StringFormat::HexColor => "hex color string in #RRGGBB form",
            StringFormat::IsoDate => "date string in YYYY-MM-DD form",
            StringFormat::Phone => "phone number string",
        }
    }
}

/// Field data type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    Text {
        min_len: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_len: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<StringFormat>,
    },
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Bool,
    Object {
        fields: Vec<FieldDef>,
    },
    Array {
        element: Box<FieldType>,
        min_items: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
    },
}

impl FieldType {
    /// Non-empty text up to `max_len` characters
    pub fn text(max_len: usize) -> Self {
        FieldType::Text {
            min_len: 1,
            max_len: Some(max_len),
            format: None,
        }
    }

    pub fn formatted(format: StringFormat) -> Self {
        FieldType::Text {
            min_len: 1,
            max_len: None,
            format: Some(format),
        }
    }

    pub fn url() -> Self {
        Self::formatted(StringFormat::Url)
    }

    pub fn email() -> Self {
        Self::formatted(StringFormat::Email)
    }

    pub fn hex_color() -> Self {
        Self::formatted(StringFormat::HexColor)
    }

    pub fn date() -> Self {
        Self::formatted(StringFormat::IsoDate)
    }

    pub fn integer(min: Option<i64>, max: Option<i64>) -> Self {
        FieldType::Integer { min, max }
    }

    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        FieldType::Number { min, max }
    }

    /// Number in [0, 100]
    pub fn percentage() -> Self {
        Self::number(Some(0.0), Some(100.0))
    }

    /// Number in [0, 1]
    pub fn opacity() -> Self {
        Self::number(Some(0.0), Some(1.0))
    }

    pub fn object(fields: Vec<FieldDef>) -> Self {
        FieldType::Object { fields }
    }

    /// Array with between `min` and `max` items
    pub fn list(element: FieldType, min: usize, max: Option<usize>) -> Self {
        FieldType::Array {
            element: Box::new(element),
            min_items: min,
            max_items: max,
        }
    }

    /// Array with exactly `count` items
    pub fn exactly(count: usize, element: FieldType) -> Self {
        Self::list(element, count, Some(count))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text { .. } => "string",
            FieldType::Integer { .. } => "integer",
            FieldType::Number { .. } => "number",
            FieldType::Bool => "boolean",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// Expected type/format description for error reports
    pub fn describe(&self) -> String {
        match self {
            FieldType::Text {
                format: Some(format),
                ..
            } => format.describe().to_string(),
            FieldType::Text {
                min_len,
                max_len: Some(max),
                ..
            } => format!("string ({}-{} characters)", min_len, max),
            FieldType::Text { min_len, .. } if *min_len > 0 => {
                format!("string (at least {} characters)", min_len)
            }
            FieldType::Text { .. } => "string".to_string(),
            FieldType::Integer { min, max } => describe_range("integer", *min, *max),
            FieldType::Number { min, max } => describe_range("number", *min, *max),
            FieldType::Bool => "boolean (true or false)".to_string(),
            FieldType::Object { .. } => "object".to_string(),
            FieldType::Array {
                min_items,
                max_items,
                ..
            } => match max_items {
                Some(max) if max == min_items => format!("array of exactly {} items", max),
                Some(max) => format!("array of {} to {} items", min_items, max),
                None if *min_items > 0 => format!("array of at least {} items", min_items),
                None => "array".to_string(),
            },
        }
    }
}

fn describe_range<T: std::fmt::Display>(name: &str, min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{} between {} and {}", name, lo, hi),
        (Some(lo), None) => format!("{} greater than or equal to {}", name, lo),
        (None, Some(hi)) => format!("{} less than or equal to {}", name, hi),
        (None, None) => name.to_string(),
    }
}

/// Named field definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
        }
    }
}

/// Structural schema of one section payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// Fallback for section types without a registered schema
    pub fn generic() -> Self {
        Self::new(vec![
            FieldDef::required("title", FieldType::text(100)),
            FieldDef::required("description", FieldType::text(5000)),
        ])
    }

    /// Splits every field path into (required, optional).
    ///
    /// A path is required only if it and all its ancestors are required.
    /// Array elements appear as `*` (`members.*.name`).
    pub fn field_paths(&self) -> (Vec<String>, Vec<String>) {
        let mut required = Vec::new();
        let mut optional = Vec::new();
        collect_paths(&self.fields, "", true, &mut required, &mut optional);
        (required, optional)
    }
}

fn collect_paths(
    fields: &[FieldDef],
    prefix: &str,
    parent_required: bool,
    required: &mut Vec<String>,
    optional: &mut Vec<String>,
) {
    for field in fields {
        let path = join_path(prefix, &field.name);
        let is_required = parent_required && field.required;
        if is_required {
            required.push(path.clone());
        } else {
            optional.push(path.clone());
        }

        let mut field_type = &field.field_type;
        let mut nested_prefix = path;
        while let FieldType::Array { element, .. } = field_type {
            nested_prefix = join_path(&nested_prefix, "*");
            field_type = element;
        }
        if let FieldType::Object { fields } = field_type {
            collect_paths(fields, &nested_prefix, is_required, required, optional);
        }
    }
}

/// Creates a field path from prefix and field name.
pub fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Drops array indices from a dotted path: `members.2.photo.url` -> `members.photo.url`
pub fn schema_path(path: &str) -> String {
    path.split('.')
        .filter(|segment| !segment.is_empty() && segment.parse::<usize>().is_err() && *segment != "*")
        .collect::<Vec<_>>()
        .join(".")
}
