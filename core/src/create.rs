//! Free-function schema constructors.
//!
//! These mirror the [`SchemaNode`] constructor methods but take the two
//! modifier flags up front as `Option<bool>`, where `None` means "not set".
//! A tree built here is identical to the same tree built by hand.

use crate::{Modifiers, ObjectFields, PrimitiveKind, SchemaNode};

/// Creates a primitive leaf.
///
/// # Examples
///
/// ```
/// use value_schema_core::{PrimitiveKind, SchemaNode, schema_value};
///
/// let specialty = schema_value(PrimitiveKind::String, Some(true), Some(true));
/// assert_eq!(specialty, SchemaNode::string().unrequired().nullable());
/// assert_eq!(schema_value(PrimitiveKind::Number, None, None), SchemaNode::number());
/// ```
pub fn schema_value(
    primitive: PrimitiveKind,
    unrequired: Option<bool>,
    nullable: Option<bool>,
) -> SchemaNode {
    SchemaNode::value(primitive).with_modifiers(Modifiers::from_flags(unrequired, nullable))
}

/// Creates an array node whose elements must conform to `element`.
pub fn schema_array(
    element: SchemaNode,
    unrequired: Option<bool>,
    nullable: Option<bool>,
) -> SchemaNode {
    SchemaNode::array(element).with_modifiers(Modifiers::from_flags(unrequired, nullable))
}

/// Creates an object node from a field table or any `(name, schema)` pairs.
///
/// # Examples
///
/// ```
/// use value_schema_core::{PrimitiveKind, SchemaNode, schema_object, schema_value};
///
/// let hospital = schema_object(
///     [("name", schema_value(PrimitiveKind::String, None, None))],
///     None,
///     Some(true),
/// );
/// assert!(hospital.is_nullable());
/// assert_eq!(hospital, SchemaNode::object([("name", SchemaNode::string())]).nullable());
/// ```
pub fn schema_object<K, I>(
    fields: I,
    unrequired: Option<bool>,
    nullable: Option<bool>,
) -> SchemaNode
where
    K: Into<String>,
    I: IntoIterator<Item = (K, SchemaNode)>,
{
    SchemaNode::object(fields).with_modifiers(Modifiers::from_flags(unrequired, nullable))
}

/// Returns the fields of `base` followed by `extra`, for building an object
/// schema that reuses another one's field table.
///
/// Fields in `extra` replace same-named fields of `base`. A non-object
/// `base` contributes nothing.
///
/// # Examples
///
/// ```
/// use value_schema_core::{SchemaNode, extend_fields};
///
/// let named_id = SchemaNode::object([
///     ("name", SchemaNode::string()),
///     ("id", SchemaNode::number()),
/// ]);
/// let doctor = SchemaNode::object(extend_fields(
///     &named_id,
///     [("specialty", SchemaNode::string().unrequired().nullable())],
/// ));
/// assert_eq!(doctor.fields().map(|f| f.len()), Some(3));
/// ```
pub fn extend_fields<K, I>(base: &SchemaNode, extra: I) -> ObjectFields
where
    K: Into<String>,
    I: IntoIterator<Item = (K, SchemaNode)>,
{
    let mut fields = base.fields().cloned().unwrap_or_default();
    fields.extend(extra.into_iter().map(|(name, schema)| (name.into(), schema)));
    fields
}
