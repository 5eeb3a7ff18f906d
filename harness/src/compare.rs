//! Recursive value equality.
//!
//! [`recursively_equal`] differs from `DynamicValue`'s derived `PartialEq`
//! in how it reads mappings: keys are compared over the union of both sides,
//! and a missing key reads as absent, so `{"a": <absent>}` equals `{}`.

use value_schema_core::{DynamicValue, SchemaNode};

use crate::error::Result;

/// Returns `true` if both values are equal by value, recursively.
///
/// Values of different categories are never equal. Sequences must have the
/// same length and pairwise equal elements.
///
/// # Examples
///
/// ```
/// use value_schema_core::DynamicValue;
/// use value_schema_harness::recursively_equal;
///
/// let a = DynamicValue::mapping([("id", DynamicValue::from(1)), ("note", DynamicValue::Absent)]);
/// let b = DynamicValue::mapping([("id", 1)]);
/// assert!(recursively_equal(&a, &b));
/// assert!(!recursively_equal(&DynamicValue::Null, &DynamicValue::Absent));
/// ```
pub fn recursively_equal(left: &DynamicValue, right: &DynamicValue) -> bool {
    match (left, right) {
        (DynamicValue::Absent, DynamicValue::Absent) | (DynamicValue::Null, DynamicValue::Null) => {
            true
        }
        (DynamicValue::Bool(a), DynamicValue::Bool(b)) => a == b,
        (DynamicValue::Number(a), DynamicValue::Number(b)) => a == b,
        (DynamicValue::String(a), DynamicValue::String(b)) => a == b,
        (DynamicValue::Sequence(a), DynamicValue::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| recursively_equal(x, y))
        }
        (DynamicValue::Mapping(a), DynamicValue::Mapping(b)) => a
            .keys()
            .chain(b.keys())
            .all(|key| recursively_equal(left.get(key), right.get(key))),
        _ => false,
    }
}

/// Compares two schema trees through their serialized dynamic form.
///
/// # Errors
///
/// Returns [`Schema`](crate::HarnessError::Schema) if either tree cannot be
/// serialized.
pub fn schemas_equal(left: &SchemaNode, right: &SchemaNode) -> Result<bool> {
    let left = DynamicValue::from_serialize(left)?;
    let right = DynamicValue::from_serialize(right)?;
    Ok(recursively_equal(&left, &right))
}
