//! Test support for value schemas.
//!
//! This crate provides the two collaborators used to exercise
//! `value-schema-core` from tests:
//!
//! - [`recursively_equal`] / [`schemas_equal`] — deep value equality, used to
//!   confirm that trees built in different ways are structurally identical.
//! - [`TestRun`] — a named-assertion runner that records every step and
//!   reports overall success in a [`RunReport`].
//!
//! # Quick start
//!
//! ```
//! use value_schema_core::{PrimitiveKind, SchemaNode, schema_object, schema_value};
//! use value_schema_harness::{TestRun, schemas_equal};
//!
//! let by_hand = SchemaNode::object([("name", SchemaNode::string())]);
//! let name = schema_value(PrimitiveKind::String, None, None);
//! let by_helper = schema_object([("name", name)], None, None);
//!
//! let report = TestRun::run("Schema Creation", |run| {
//!     run.assert_true("named id", schemas_equal(&by_hand, &by_helper).unwrap());
//! });
//! report.into_result().unwrap();
//! ```

mod compare;
mod error;
mod runner;

pub use compare::{recursively_equal, schemas_equal};
pub use error::{HarnessError, Result};
pub use runner::{RunReport, StepOutcome, StepRecord, TestRun};
