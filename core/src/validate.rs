//! Value validation against a schema tree.
//!
//! Walks a [`DynamicValue`] and a [`SchemaNode`] in lockstep. At every level
//! absence is checked first, then null, and only then the node's shape. The
//! verdict is a plain `bool`; the reason for a mismatch is emitted as a
//! `tracing` event and never returned.
//!
//! # Examples
//!
//! ```
//! use value_schema_core::*;
//!
//! let schema = SchemaNode::object([
//!     ("name", SchemaNode::string()),
//!     ("id", SchemaNode::number()),
//! ]);
//!
//! let john = DynamicValue::mapping([
//!     ("name", DynamicValue::from("John")),
//!     ("id", DynamicValue::from(0)),
//! ]);
//! assert!(validate(&john, &schema));
//!
//! // `name` is not unrequired, so leaving it out fails.
//! let nameless = DynamicValue::mapping([("id", 0)]);
//! assert!(!validate(&nameless, &schema));
//! ```

use tracing::{debug, trace};

use crate::{DynamicValue, SchemaNode, ValidationConfig};

/// Checks `value` against `schema` with the default configuration.
///
/// Returns `true` iff the value conforms. Never panics.
pub fn validate(value: &DynamicValue, schema: &SchemaNode) -> bool {
    Validator::default().validate(value, schema)
}

/// Checks a JSON document against `schema`.
///
/// JSON has no absent state, so the top-level value is always present.
///
/// # Examples
///
/// ```
/// use value_schema_core::{SchemaNode, validate_json};
///
/// let schema = SchemaNode::array(SchemaNode::object([("date", SchemaNode::string())]));
/// assert!(validate_json(&serde_json::json!([]), &schema));
/// assert!(!validate_json(&serde_json::json!([{"date": "a"}, {"date": 1}]), &schema));
/// ```
pub fn validate_json(value: &serde_json::Value, schema: &SchemaNode) -> bool {
    validate(&DynamicValue::from(value), schema)
}

/// Schema validator carrying a [`ValidationConfig`].
///
/// A validator holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator with `config`.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Checks `value` against `schema`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_schema_core::*;
    ///
    /// let validator = Validator::new(ValidationConfig { exhaustive: true });
    /// let specialty = SchemaNode::string().unrequired().nullable();
    ///
    /// assert!(validator.validate(&DynamicValue::from("x"), &specialty));
    /// assert!(validator.validate(&DynamicValue::Absent, &specialty));
    /// assert!(validator.validate(&DynamicValue::Null, &specialty));
    /// assert!(!validator.validate(&DynamicValue::from(5), &specialty));
    /// ```
    pub fn validate(&self, value: &DynamicValue, schema: &SchemaNode) -> bool {
        let verdict = self.check(value, schema);
        debug!(kind = ?schema.kind(), verdict, "schema validation finished");
        verdict
    }

    fn check(&self, value: &DynamicValue, schema: &SchemaNode) -> bool {
        match value {
            DynamicValue::Absent => {
                let accepted = schema.is_unrequired();
                if !accepted {
                    trace!(kind = ?schema.kind(), "required value is absent");
                }
                return accepted;
            }
            DynamicValue::Null => {
                let accepted = schema.is_nullable();
                if !accepted {
                    trace!(kind = ?schema.kind(), "null is not permitted");
                }
                return accepted;
            }
            _ => {}
        }

        match schema {
            SchemaNode::Any => true,
            SchemaNode::Value { primitive, .. } => {
                let accepted = primitive.matches(value.category());
                if !accepted {
                    trace!(
                        expected = ?primitive,
                        found = ?value.category(),
                        "primitive kind mismatch"
                    );
                }
                accepted
            }
            SchemaNode::Array { element, .. } => {
                let DynamicValue::Sequence(items) = value else {
                    trace!(found = ?value.category(), "expected a sequence");
                    return false;
                };
                self.all(items.iter().enumerate(), |(index, item)| {
                    let accepted = self.check(item, element);
                    if !accepted {
                        trace!(index, "sequence element does not conform");
                    }
                    accepted
                })
            }
            SchemaNode::Object { fields, .. } => {
                if !matches!(value, DynamicValue::Mapping(_)) {
                    trace!(found = ?value.category(), "expected a mapping");
                    return false;
                }
                self.all(fields.iter(), |(name, field)| {
                    let accepted = self.check(value.get(name), field);
                    if !accepted {
                        trace!(field = %name, "field does not conform");
                    }
                    accepted
                })
            }
        }
    }

    /// `Iterator::all`, optionally without short-circuiting.
    fn all<I, F>(&self, mut items: I, mut check: F) -> bool
    where
        I: Iterator,
        F: FnMut(I::Item) -> bool,
    {
        if self.config.exhaustive {
            items.fold(true, |ok, item| check(item) && ok)
        } else {
            items.all(check)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Modifiers, PrimitiveKind};

    fn all_modifiers() -> [Modifiers; 4] {
        [
            Modifiers::new(false, false),
            Modifiers::new(true, false),
            Modifiers::new(false, true),
            Modifiers::new(true, true),
        ]
    }

    fn shapes() -> Vec<SchemaNode> {
        vec![
            SchemaNode::boolean(),
            SchemaNode::number(),
            SchemaNode::string(),
            SchemaNode::array(SchemaNode::number()),
            SchemaNode::object([("id", SchemaNode::number())]),
        ]
    }

    #[test]
    fn test_absent_and_null_ignore_shape() {
        for shape in shapes() {
            for modifiers in all_modifiers() {
                let schema = shape.clone().with_modifiers(modifiers);
                assert_eq!(
                    validate(&DynamicValue::Absent, &schema),
                    modifiers.unrequired,
                    "absent vs {schema:?}"
                );
                assert_eq!(
                    validate(&DynamicValue::Null, &schema),
                    modifiers.nullable,
                    "null vs {schema:?}"
                );
            }
        }
    }

    #[test]
    fn test_any_rejects_absent_and_null() {
        assert!(!validate(&DynamicValue::Absent, &SchemaNode::any()));
        assert!(!validate(&DynamicValue::Null, &SchemaNode::any()));
        assert!(validate(&DynamicValue::from(vec![1]), &SchemaNode::any()));
        assert!(validate(&DynamicValue::mapping([("a", 1)]), &SchemaNode::any()));
    }

    #[test]
    fn test_primitive_kinds_do_not_coerce() {
        assert!(!validate(&DynamicValue::from("1"), &SchemaNode::number()));
        assert!(!validate(&DynamicValue::from(1), &SchemaNode::string()));
        assert!(!validate(&DynamicValue::from(1), &SchemaNode::boolean()));
        assert!(!validate(&DynamicValue::from(true), &SchemaNode::number()));
        assert!(validate(
            &DynamicValue::from(true),
            &SchemaNode::value(PrimitiveKind::Boolean)
        ));
        assert!(!validate(&DynamicValue::from(vec!["a"]), &SchemaNode::string()));
    }

    #[test]
    fn test_unrequired_still_checks_present_values() {
        let schema = SchemaNode::number().unrequired();
        assert!(validate(&DynamicValue::Absent, &schema));
        assert!(!validate(&DynamicValue::Null, &schema));
        assert!(!validate(&DynamicValue::from("5"), &schema));
        assert!(validate(&DynamicValue::from(5), &schema));
    }

    #[test]
    fn test_sequence_does_not_satisfy_object() {
        let empty_object = SchemaNode::object::<&str, _>([]);
        assert!(!validate(&DynamicValue::Sequence(Vec::new()), &empty_object));
        assert!(!validate(&DynamicValue::from("x"), &empty_object));
        assert!(validate(&DynamicValue::mapping([("extra", 1)]), &empty_object));
    }

    #[test]
    fn test_mapping_does_not_satisfy_array() {
        let schema = SchemaNode::array(SchemaNode::any());
        assert!(!validate(&DynamicValue::mapping::<&str, i32, _>([]), &schema));
        assert!(validate(&DynamicValue::Sequence(Vec::new()), &schema));
    }

    #[test]
    fn test_exhaustive_mode_gives_same_verdict() {
        let schema = SchemaNode::array(SchemaNode::object([("date", SchemaNode::string())]));
        let value = DynamicValue::Sequence(vec![
            DynamicValue::mapping([("date", DynamicValue::from(1))]),
            DynamicValue::mapping([("date", DynamicValue::from("b"))]),
            DynamicValue::mapping([("date", DynamicValue::Null)]),
        ]);

        let exhaustive = Validator::new(ValidationConfig { exhaustive: true });
        assert!(exhaustive.config().exhaustive);
        assert!(!exhaustive.validate(&value, &schema));
        assert!(!Validator::default().validate(&value, &schema));
    }

    #[test]
    fn test_absent_entry_reads_like_missing_key() {
        let schema = SchemaNode::object([("address", SchemaNode::string())]);
        let explicit = DynamicValue::mapping([("address", DynamicValue::Absent)]);
        let missing = DynamicValue::mapping::<&str, DynamicValue, _>([]);
        assert!(!validate(&explicit, &schema));
        assert!(!validate(&missing, &schema));

        let schema = SchemaNode::object([("address", SchemaNode::string().unrequired())]);
        assert!(validate(&explicit, &schema));
        assert!(validate(&missing, &schema));
    }
}
