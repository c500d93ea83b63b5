//! # Quickfields - Schema Field Shorthand
//!
//! Quickfields builds content-schema field descriptors from terse arguments:
//! a name, a type, an options bag, and optional nested children or validation
//! rules. It exists to cut the boilerplate of authoring many similar field
//! descriptors for a content-modeling platform.
//!
//! ## Features
//!
//! - **Terse construction**: [`quick_field`] turns a name/type/options triple
//!   into a full descriptor, deriving display titles from snake_case or
//!   camelCase keys
//! - **Fluent builder**: [`FieldBuilder`] chains children, options, preview
//!   and validation, then exports an owned [`Field`]
//! - **Lazy validation**: rule programs are data ([`Validation`]) and are
//!   interpreted only when the consumer supplies its [`RuleBuilder`]
//!   capability
//! - **Permissive**: inapplicable inputs degrade to partial descriptors
//!   instead of erroring
//!
//! ## Quick Start
//!
//! ```
//! use quickfields::FieldBuilder;
//! use serde_json::json;
//!
//! let dates = FieldBuilder::new("dates", "array")
//!     .children(vec![FieldBuilder::new("date", "datetime").build()])
//!     .build();
//!
//! assert_eq!(
//!     serde_json::to_value(&dates).unwrap(),
//!     json!({
//!         "name": "dates",
//!         "type": "array",
//!         "of": [{ "name": "date", "title": "Date", "type": "datetime" }],
//!     })
//! );
//! ```

pub mod builder;
pub mod field;
pub mod validation;

pub use builder::FieldBuilder;
pub use field::{quick_field, simple_field, Field, FieldConfig, FieldName, Options, Preview};
pub use validation::{apply_rule, Applied, Modifier, RuleBuilder, RuleError, RuleSet, Validation};
