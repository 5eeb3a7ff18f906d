//! Schema data model and runtime validation for dynamically typed values.
//!
//! This crate lets a program describe the expected shape of a value as data
//! and check unknown values against it at runtime:
//!
//! - [`SchemaNode`] — a schema tree node: a primitive [`Value`](SchemaNode::Value)
//!   leaf, an [`Array`](SchemaNode::Array), an [`Object`](SchemaNode::Object)
//!   with declared fields, or the [`Any`](SchemaNode::Any) wildcard.
//! - [`Modifiers`] — per-node permission to be absent (`unrequired`) and to
//!   be null (`nullable`), independent of the node's shape.
//! - [`DynamicValue`] — the checked value, with absence and null as distinct
//!   states.
//! - [`validate`] / [`Validator`] — the boolean conformance check.
//!
//! Construction helpers ([`schema_value`], [`schema_array`],
//! [`schema_object`]) build the same trees as the [`SchemaNode`] methods, and
//! [`Schematic`] with [`impl_schematic!`] derives schemas from Rust types.
//!
//! # Example
//!
//! ```
//! use value_schema_core::*;
//!
//! let hospital = SchemaNode::object([
//!     ("name", SchemaNode::string()),
//!     ("id", SchemaNode::number()),
//! ]);
//! let patient = SchemaNode::object([
//!     ("name", SchemaNode::string()),
//!     ("address", SchemaNode::string().unrequired()),
//!     ("currentlyAdmittedTo", hospital.nullable()),
//! ]);
//!
//! let susan = DynamicValue::from_json_str(
//!     r#"{"name": "Susan", "currentlyAdmittedTo": null, "ward": 3}"#,
//! )
//! .unwrap();
//! assert!(validate(&susan, &patient));
//!
//! let joe = DynamicValue::from_json_str(
//!     r#"{"name": "Joe", "address": null, "currentlyAdmittedTo": null}"#,
//! )
//! .unwrap();
//! assert!(!validate(&joe, &patient));
//! ```

mod config;
mod create;
mod error;
mod schematic;
mod types;
mod validate;
mod value;

pub use config::ValidationConfig;
pub use create::{extend_fields, schema_array, schema_object, schema_value};
pub use error::{Error, Result};
pub use schematic::{Modifiable, Schematic};
pub use types::*;
pub use validate::{Validator, validate, validate_json};
pub use value::{DynamicValue, ValueCategory};
