//! Fluent builder over [`quick_field`].

use serde_json::Value;

use crate::field::{quick_field, Field, FieldConfig, FieldName, Options, Preview};
use crate::validation::Validation;

/// Chainable builder producing a [`Field`].
///
/// Every method consumes and returns the builder, and [`build`] consumes it
/// outright, so an exported field can never be changed behind the caller's
/// back.
///
/// ```
/// use quickfields::{simple_field, FieldBuilder};
///
/// let dates = FieldBuilder::new("dates", "array")
///     .children(vec![simple_field("date")])
///     .build();
///
/// assert_eq!(dates.of.len(), 1);
/// assert_eq!(dates.title, None);
/// ```
///
/// [`build`]: FieldBuilder::build
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBuilder {
    name: FieldName,
    field_type: String,
    options: Options,
    children: Vec<Field>,
    validation: Option<Validation>,
    preview: Option<Preview>,
}

impl FieldBuilder {
    pub fn new(name: impl Into<FieldName>, field_type: impl Into<String>) -> Self {
        FieldBuilder {
            name: name.into(),
            field_type: field_type.into(),
            options: Options::new(),
            children: Vec::new(),
            validation: None,
            preview: None,
        }
    }

    /// Replace the options bag wholesale.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Insert a single option key/value pair.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Set the child fields; routed to `of` or `fields` by the field type,
    /// and dropped silently for non-container types.
    pub fn children(mut self, children: Vec<Field>) -> Self {
        self.children = children;
        self
    }

    /// Append one child field.
    pub fn child(mut self, child: Field) -> Self {
        self.children.push(child);
        self
    }

    /// Attach a validation rule program.
    pub fn validation(mut self, validation: impl Into<Validation>) -> Self {
        self.validation = Some(validation.into());
        self
    }

    /// Set the preview selection for the field.
    pub fn preview(mut self, select: Value) -> Self {
        self.preview = Some(Preview { select });
        self
    }

    /// Export the field. Consumes the builder; the result is an owned
    /// snapshot with no ties to any builder state.
    pub fn build(self) -> Field {
        let mut field = quick_field(
            self.name,
            self.field_type,
            self.options,
            FieldConfig {
                children: self.children,
                validation: self.validation,
            },
        );
        field.preview = self.preview;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::simple_field;
    use crate::validation::RuleSet;
    use serde_json::json;

    #[test]
    fn test_builder_matches_constructor_output() {
        let built = FieldBuilder::new("dates", "array")
            .children(vec![simple_field("date")])
            .build();

        let constructed = quick_field(
            "dates",
            "array",
            Options::new(),
            FieldConfig::children(vec![simple_field("date")]),
        );

        assert_eq!(built, constructed);
    }

    #[test]
    fn test_option_inserts_accumulate() {
        let field = FieldBuilder::new("dateOfBirth", "date")
            .option("dateFormat", json!("YYYY-MM-DD"))
            .option("calendarTodayLabel", json!("Today"))
            .build();

        let options = field.options.expect("options should be present");
        assert_eq!(options.len(), 2);
        assert_eq!(options["dateFormat"], json!("YYYY-MM-DD"));
    }

    #[test]
    fn test_preview_lands_on_exported_field() {
        let field = FieldBuilder::new("author", "object")
            .child(simple_field("name"))
            .preview(json!({ "title": "name" }))
            .build();

        assert_eq!(
            field.preview,
            Some(Preview {
                select: json!({ "title": "name" })
            })
        );
    }

    #[test]
    fn test_validation_survives_export() {
        let field = FieldBuilder::new("name", "string")
            .validation(RuleSet::new().required().min(3.0))
            .build();

        assert!(field.validation.is_some());
    }

    #[test]
    fn test_exported_fields_are_independent_snapshots() {
        let builder = FieldBuilder::new("tags", "array").child(simple_field("tag"));

        let first = builder.clone().build();
        let second = builder.child(simple_field("extra")).build();

        assert_eq!(first.of.len(), 1);
        assert_eq!(second.of.len(), 2);
    }
}
