//! Schema type definitions for value shape modeling.
//!
//! This module defines the data model used to describe the expected shape of
//! a dynamically typed value. A schema is a tree of [`SchemaNode`]s; every
//! node except [`SchemaNode::Any`] carries a pair of [`Modifiers`] that say
//! whether the value may be absent and whether it may be null.
//!
//! Trees are plain owned data: children are boxed or stored in a
//! [`BTreeMap`], so a tree is acyclic by construction and read-only once
//! built. Schema trees serialize with [`serde`] for inspection and structural
//! comparison, but are never parsed back from an external format.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field table of an object schema, keyed by field name.
pub type ObjectFields = BTreeMap<String, SchemaNode>;

/// Primitive kind accepted by a [`SchemaNode::Value`] leaf.
///
/// # Examples
///
/// ```
/// use value_schema_core::{PrimitiveKind, ValueCategory};
///
/// assert!(PrimitiveKind::Number.matches(ValueCategory::Number));
/// assert!(!PrimitiveKind::String.matches(ValueCategory::Number));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// `true` / `false`.
    Boolean,
    /// Any numeric value.
    Number,
    /// UTF-8 text.
    String,
}

impl PrimitiveKind {
    /// Returns `true` if a value of runtime `category` is exactly this kind.
    pub fn matches(self, category: crate::ValueCategory) -> bool {
        use crate::ValueCategory;

        matches!(
            (self, category),
            (PrimitiveKind::Boolean, ValueCategory::Boolean)
                | (PrimitiveKind::Number, ValueCategory::Number)
                | (PrimitiveKind::String, ValueCategory::String)
        )
    }
}

/// Absence and null permissions carried by a schema node.
///
/// The two flags are independent: a node may accept absence, null, both,
/// or neither. The default accepts neither.
///
/// # Examples
///
/// ```
/// use value_schema_core::Modifiers;
///
/// let m = Modifiers::default();
/// assert!(!m.unrequired && !m.nullable);
///
/// let m = Modifiers::new(true, false);
/// assert!(m.unrequired);
/// assert!(!m.nullable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Modifiers {
    /// The value may be absent (never supplied).
    pub unrequired: bool,
    /// The value may be explicitly null.
    pub nullable: bool,
}

impl Modifiers {
    /// Neither absence nor null is accepted.
    pub const NONE: Modifiers = Modifiers {
        unrequired: false,
        nullable: false,
    };

    /// Creates modifiers from explicit flags.
    pub const fn new(unrequired: bool, nullable: bool) -> Self {
        Self {
            unrequired,
            nullable,
        }
    }

    /// Creates modifiers from optional flags, treating "not set" as `false`.
    pub fn from_flags(unrequired: Option<bool>, nullable: Option<bool>) -> Self {
        Self {
            unrequired: unrequired.unwrap_or(false),
            nullable: nullable.unwrap_or(false),
        }
    }
}

/// Fieldless tag naming the variant of a [`SchemaNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// Primitive leaf.
    Value,
    /// Homogeneous sequence.
    Array,
    /// Keyed mapping with declared fields.
    Object,
    /// Wildcard leaf.
    Any,
}

/// One node of a schema tree.
///
/// Build nodes with the constructor methods ([`value`](SchemaNode::value),
/// [`array`](SchemaNode::array), [`object`](SchemaNode::object),
/// [`any`](SchemaNode::any)) and chain [`unrequired`](SchemaNode::unrequired)
/// or [`nullable`](SchemaNode::nullable) to relax the node.
///
/// # Examples
///
/// ```
/// use value_schema_core::{SchemaKind, SchemaNode};
///
/// let named_id = SchemaNode::object([
///     ("name", SchemaNode::string()),
///     ("id", SchemaNode::number()),
/// ]);
/// assert_eq!(named_id.kind(), SchemaKind::Object);
/// assert_eq!(named_id.fields().map(|f| f.len()), Some(2));
///
/// let specialty = SchemaNode::string().unrequired().nullable();
/// assert!(specialty.is_unrequired());
/// assert!(specialty.is_nullable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    /// Scalar leaf of a fixed primitive kind.
    Value {
        /// Accepted primitive kind.
        primitive: PrimitiveKind,
        /// Absence/null permissions.
        modifiers: Modifiers,
    },
    /// Sequence whose every element conforms to `element`.
    Array {
        /// Schema applied to each element.
        element: Box<SchemaNode>,
        /// Absence/null permissions.
        modifiers: Modifiers,
    },
    /// Keyed mapping whose declared fields each conform to their schema.
    Object {
        /// Declared fields. Undeclared keys in a value are ignored.
        fields: ObjectFields,
        /// Absence/null permissions.
        modifiers: Modifiers,
    },
    /// Matches any present, non-null value.
    Any,
}

impl SchemaNode {
    /// Creates a primitive leaf of `primitive` kind.
    pub fn value(primitive: PrimitiveKind) -> Self {
        SchemaNode::Value {
            primitive,
            modifiers: Modifiers::NONE,
        }
    }

    /// Shorthand for `SchemaNode::value(PrimitiveKind::Boolean)`.
    pub fn boolean() -> Self {
        Self::value(PrimitiveKind::Boolean)
    }

    /// Shorthand for `SchemaNode::value(PrimitiveKind::Number)`.
    pub fn number() -> Self {
        Self::value(PrimitiveKind::Number)
    }

    /// Shorthand for `SchemaNode::value(PrimitiveKind::String)`.
    pub fn string() -> Self {
        Self::value(PrimitiveKind::String)
    }

    /// Creates an array node whose elements must conform to `element`.
    pub fn array(element: SchemaNode) -> Self {
        SchemaNode::Array {
            element: Box::new(element),
            modifiers: Modifiers::NONE,
        }
    }

    /// Creates an object node from `(name, schema)` pairs.
    ///
    /// A later pair with the same name replaces an earlier one.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        SchemaNode::Object {
            fields: fields
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Creates the wildcard node.
    pub const fn any() -> Self {
        SchemaNode::Any
    }

    /// Marks the node as accepting an absent value. No-op on `Any`.
    pub fn unrequired(mut self) -> Self {
        if let Some(modifiers) = self.modifiers_mut() {
            modifiers.unrequired = true;
        }
        self
    }

    /// Marks the node as accepting null. No-op on `Any`.
    pub fn nullable(mut self) -> Self {
        if let Some(modifiers) = self.modifiers_mut() {
            modifiers.nullable = true;
        }
        self
    }

    /// Replaces the node's modifiers. No-op on `Any`.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        if let Some(slot) = self.modifiers_mut() {
            *slot = modifiers;
        }
        self
    }

    /// Returns the node's modifiers; `Any` always reports [`Modifiers::NONE`].
    pub fn modifiers(&self) -> Modifiers {
        match self {
            SchemaNode::Value { modifiers, .. }
            | SchemaNode::Array { modifiers, .. }
            | SchemaNode::Object { modifiers, .. } => *modifiers,
            SchemaNode::Any => Modifiers::NONE,
        }
    }

    fn modifiers_mut(&mut self) -> Option<&mut Modifiers> {
        match self {
            SchemaNode::Value { modifiers, .. }
            | SchemaNode::Array { modifiers, .. }
            | SchemaNode::Object { modifiers, .. } => Some(modifiers),
            SchemaNode::Any => None,
        }
    }

    /// Returns `true` if an absent value is accepted.
    pub fn is_unrequired(&self) -> bool {
        self.modifiers().unrequired
    }

    /// Returns `true` if null is accepted.
    pub fn is_nullable(&self) -> bool {
        self.modifiers().nullable
    }

    /// Returns the variant tag.
    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaNode::Value { .. } => SchemaKind::Value,
            SchemaNode::Array { .. } => SchemaKind::Array,
            SchemaNode::Object { .. } => SchemaKind::Object,
            SchemaNode::Any => SchemaKind::Any,
        }
    }

    /// Returns the declared fields of an object node.
    pub fn fields(&self) -> Option<&ObjectFields> {
        match self {
            SchemaNode::Object { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Returns the element schema of an array node.
    pub fn element(&self) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Returns the nesting depth of the tree; a leaf has depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_schema_core::SchemaNode;
    ///
    /// assert_eq!(SchemaNode::any().depth(), 1);
    /// assert_eq!(SchemaNode::object::<&str, _>([]).depth(), 1);
    /// let visits = SchemaNode::array(SchemaNode::object([("date", SchemaNode::string())]));
    /// assert_eq!(visits.depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            SchemaNode::Value { .. } | SchemaNode::Any => 1,
            SchemaNode::Array { element, .. } => 1 + element.depth(),
            SchemaNode::Object { fields, .. } => {
                1 + fields.values().map(SchemaNode::depth).max().unwrap_or(0)
            }
        }
    }
}
