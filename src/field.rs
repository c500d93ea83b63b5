//! Field descriptor construction.
//!
//! This module provides the core shorthand for writing schema field
//! descriptors: a single constructor that turns a terse name/type/options
//! triple (plus optional children and validation) into the nested mapping the
//! content platform expects.
//!
//! ## Example
//!
//! ```
//! use quickfields::{quick_field, FieldConfig, Options};
//!
//! let bio = quick_field("bio", "text", Options::new(), FieldConfig::default());
//! assert_eq!(bio.name.as_deref(), Some("bio"));
//! assert_eq!(bio.title.as_deref(), Some("Bio"));
//! assert_eq!(bio.field_type, "text");
//! ```

use heck::ToTitleCase;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::validation::Validation;

/// Options bag passed alongside a field definition.
pub type Options = Map<String, Value>;

/// Name argument for a field.
///
/// A bare key derives its title by title-casing (`"date_of_birth"` becomes
/// `"Date Of Birth"`); an explicit key/title pair passes both through
/// verbatim; an anonymous name yields a descriptor with no `name` or `title`
/// key at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldName {
    /// No name supplied; the descriptor carries neither `name` nor `title`.
    #[default]
    Anonymous,
    /// Bare key; the title is derived from it.
    Key(String),
    /// Explicit key and display title, no case transformation applied.
    Titled { name: String, title: String },
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        FieldName::Key(name.to_string())
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        FieldName::Key(name)
    }
}

impl From<(&str, &str)> for FieldName {
    fn from((name, title): (&str, &str)) -> Self {
        FieldName::Titled {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

impl From<(String, String)> for FieldName {
    fn from((name, title): (String, String)) -> Self {
        FieldName::Titled { name, title }
    }
}

impl From<[&str; 2]> for FieldName {
    fn from([name, title]: [&str; 2]) -> Self {
        FieldName::Titled {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

impl<T: Into<FieldName>> From<Option<T>> for FieldName {
    fn from(name: Option<T>) -> Self {
        name.map_or(FieldName::Anonymous, Into::into)
    }
}

/// Preview configuration attached to a field by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub select: Value,
}

/// Extension parameters for [`quick_field`]: nested children and validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldConfig {
    /// Child fields, routed to `of` (array) or `fields` (object).
    pub children: Vec<Field>,
    /// Validation rule program, stored for lazy application.
    pub validation: Option<Validation>,
}

impl FieldConfig {
    pub fn children(children: Vec<Field>) -> Self {
        FieldConfig {
            children,
            ..Default::default()
        }
    }

    pub fn validation(validation: Validation) -> Self {
        FieldConfig {
            validation: Some(validation),
            ..Default::default()
        }
    }
}

/// One schema field descriptor.
///
/// Optional keys are skipped during serialization, so the mapping handed to
/// the platform only carries the keys the constructor actually set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    /// Row count for `text` fields, hoisted out of the options bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Value>,
    /// Reference target for `reference` fields, hoisted out of the options bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    /// Child fields of an `object` field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Member fields of an `array` field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<Field>,
    /// Lazy validation rule program; applied by the consumer through a
    /// rule-builder capability, never serialized.
    #[serde(skip)]
    pub validation: Option<Validation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

fn default_field_type() -> String {
    "string".to_string()
}

/// Truthiness as the consuming platform evaluates option values: null,
/// false, zero and the empty string are falsy; arrays and objects are
/// always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Build a field descriptor from terse arguments.
///
/// # Arguments
///
/// * `name` - Bare key, `(key, title)` pair, or [`FieldName::Anonymous`]
/// * `field_type` - Platform field type, e.g. `"string"`, `"array"`
/// * `options` - Arbitrary option key/value pairs for the field
/// * `config` - Nested children and validation, see [`FieldConfig`]
///
/// # Behavior
///
/// * `array` fields never carry a `title` key.
/// * For `text` fields a truthy `rows` option is hoisted onto the descriptor
///   itself; for `reference` fields the same happens to `to`. Whatever
///   remains in the bag lands under `options`, or nowhere if the bag is
///   empty.
/// * Children are attached as `of` (array) or `fields` (object); any other
///   field type drops them silently.
///
/// Malformed or inapplicable inputs never raise an error; they degrade to a
/// partial descriptor.
pub fn quick_field(
    name: impl Into<FieldName>,
    field_type: impl Into<String>,
    mut options: Options,
    config: FieldConfig,
) -> Field {
    let field_type = field_type.into();

    let (name, mut title) = match name.into() {
        FieldName::Anonymous => (None, None),
        FieldName::Key(key) => {
            let title = key.to_title_case();
            (Some(key), Some(title))
        }
        FieldName::Titled { name, title } => (Some(name), Some(title)),
    };

    // Array fields are titleless by platform convention.
    if field_type == "array" {
        title = None;
    }

    let mut rows = None;
    let mut to = None;
    if field_type == "text" && options.get("rows").is_some_and(is_truthy) {
        rows = options.remove("rows");
    }
    if field_type == "reference" && options.get("to").is_some_and(is_truthy) {
        to = options.remove("to");
    }
    let options = (!options.is_empty()).then_some(options);

    let mut fields = Vec::new();
    let mut of = Vec::new();
    if !config.children.is_empty() {
        match field_type.as_str() {
            "array" => of = config.children,
            "object" => fields = config.children,
            other => {
                debug!(field_type = other, "children ignored for non-container field type");
            }
        }
    }

    let validation = config.validation.filter(|v| !v.is_empty());

    Field {
        name,
        title,
        field_type,
        rows,
        to,
        options,
        fields,
        of,
        validation,
        preview: None,
    }
}

/// Shorthand for the most common case: a `"string"` field with no options.
pub fn simple_field(name: impl Into<FieldName>) -> Field {
    quick_field(name, default_field_type(), Options::new(), FieldConfig::default())
}
