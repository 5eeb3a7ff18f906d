//! Schema derivation from Rust types.
//!
//! [`Schematic`] maps a Rust type to the schema its serialized form should
//! satisfy. Record types opt in with [`impl_schematic!`](crate::impl_schematic),
//! which also checks at compile time that every listed field exists with the
//! listed type, so the schema cannot drift from the struct it describes.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::{DynamicValue, SchemaNode};

/// A type with a known schema.
///
/// `Option<T>` maps to `T`'s schema marked both unrequired and nullable,
/// matching how `serde` treats missing and null fields for `Option`. It is
/// only implemented when `T` is [`Modifiable`].
///
/// # Examples
///
/// ```
/// use value_schema_core::{SchemaNode, Schematic};
///
/// assert_eq!(<Vec<u32>>::schema(), SchemaNode::array(SchemaNode::number()));
/// assert_eq!(
///     <Option<String>>::schema(),
///     SchemaNode::string().unrequired().nullable()
/// );
/// ```
pub trait Schematic {
    /// Returns the schema describing this type.
    fn schema() -> SchemaNode;
}

impl Schematic for bool {
    fn schema() -> SchemaNode {
        SchemaNode::boolean()
    }
}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Schematic for $ty {
                fn schema() -> SchemaNode {
                    SchemaNode::number()
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_modifiable {
    ($($ty:ty),* $(,)?) => {
        $(impl Modifiable for $ty {})*
    };
}

impl_modifiable!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str, String,
    char,
);

impl Schematic for str {
    fn schema() -> SchemaNode {
        SchemaNode::string()
    }
}

impl Schematic for String {
    fn schema() -> SchemaNode {
        SchemaNode::string()
    }
}

impl Schematic for char {
    fn schema() -> SchemaNode {
        SchemaNode::string()
    }
}

/// A [`Schematic`] type whose schema can carry absence and null permissions.
///
/// Types that map to [`SchemaNode::Any`] (`serde_json::Value`,
/// [`DynamicValue`]) do not implement it: `Any` never accepts null, so
/// `Option` of such a type has no schema its serialized `None` satisfies.
///
/// ```compile_fail
/// use value_schema_core::Schematic;
///
/// let _ = <Option<serde_json::Value>>::schema();
/// ```
pub trait Modifiable: Schematic {}

impl<T: Modifiable> Schematic for Option<T> {
    fn schema() -> SchemaNode {
        T::schema().unrequired().nullable()
    }
}

impl<T: Modifiable> Modifiable for Option<T> {}

impl<T: Schematic> Schematic for Vec<T> {
    fn schema() -> SchemaNode {
        SchemaNode::array(T::schema())
    }
}

impl<T: Schematic> Schematic for VecDeque<T> {
    fn schema() -> SchemaNode {
        SchemaNode::array(T::schema())
    }
}

impl<T: Schematic> Schematic for [T] {
    fn schema() -> SchemaNode {
        SchemaNode::array(T::schema())
    }
}

impl<T: Schematic, const N: usize> Schematic for [T; N] {
    fn schema() -> SchemaNode {
        SchemaNode::array(T::schema())
    }
}

impl<T: Schematic + ?Sized> Schematic for Box<T> {
    fn schema() -> SchemaNode {
        T::schema()
    }
}

impl<T: Schematic + ?Sized> Schematic for Rc<T> {
    fn schema() -> SchemaNode {
        T::schema()
    }
}

impl<T: Schematic + ?Sized> Schematic for Arc<T> {
    fn schema() -> SchemaNode {
        T::schema()
    }
}

impl<T: Schematic + ?Sized> Schematic for &T {
    fn schema() -> SchemaNode {
        T::schema()
    }
}

impl<T: Schematic> Modifiable for Vec<T> {}
impl<T: Schematic> Modifiable for VecDeque<T> {}
impl<T: Schematic> Modifiable for [T] {}
impl<T: Schematic, const N: usize> Modifiable for [T; N] {}
impl<T: Modifiable + ?Sized> Modifiable for Box<T> {}
impl<T: Modifiable + ?Sized> Modifiable for Rc<T> {}
impl<T: Modifiable + ?Sized> Modifiable for Arc<T> {}
impl<T: Modifiable + ?Sized> Modifiable for &T {}

// Value types are unconstrained, so only the mapping itself is checked.
impl<T> Schematic for BTreeMap<String, T> {
    fn schema() -> SchemaNode {
        SchemaNode::object::<String, _>([])
    }
}

impl<T, S> Schematic for HashMap<String, T, S> {
    fn schema() -> SchemaNode {
        SchemaNode::object::<String, _>([])
    }
}

impl<T> Modifiable for BTreeMap<String, T> {}
impl<T, S> Modifiable for HashMap<String, T, S> {}

impl Schematic for serde_json::Value {
    fn schema() -> SchemaNode {
        SchemaNode::any()
    }
}

impl Schematic for DynamicValue {
    fn schema() -> SchemaNode {
        SchemaNode::any()
    }
}

/// Implements [`Schematic`] for a record type as an object schema.
///
/// Each listed field becomes a declared object field named after the Rust
/// field, or after the string given with `as`. Every field is checked at
/// compile time to exist on the type with exactly the listed type; a field
/// that only derefs to the listed type is rejected. The record also becomes
/// [`Modifiable`], so `Option<Record>` has a schema.
///
/// # Examples
///
/// ```
/// use value_schema_core::{SchemaNode, Schematic, impl_schematic};
///
/// struct Doctor {
///     name: String,
///     id: u32,
///     head_of: Option<String>,
/// }
///
/// impl_schematic!(Doctor {
///     name: String,
///     id: u32,
///     head_of as "headOf": Option<String>,
/// });
///
/// let schema = Doctor::schema();
/// let fields = schema.fields().unwrap();
/// assert_eq!(fields["id"], SchemaNode::number());
/// assert!(fields["headOf"].is_nullable());
/// ```
///
/// ```compile_fail
/// use value_schema_core::impl_schematic;
///
/// struct Ward {
///     name: Box<String>,
/// }
///
/// impl_schematic!(Ward { name: String });
/// ```
#[macro_export]
macro_rules! impl_schematic {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    ($ty:ty { $($field:ident $(as $key:literal)? : $field_ty:ty),* $(,)? }) => {
        impl $crate::Schematic for $ty {
            fn schema() -> $crate::SchemaNode {
                #[allow(dead_code)]
                fn same_type<T: ?Sized>(_: &T, _: ::std::marker::PhantomData<T>) {}

                #[allow(dead_code)]
                fn assert_field_types(value: &$ty) {
                    let _ = value;
                    $(same_type(&value.$field, ::std::marker::PhantomData::<$field_ty>);)*
                }

                #[allow(unused_mut)]
                let mut fields = $crate::ObjectFields::new();
                $(
                    fields.insert(
                        ::std::string::String::from($crate::impl_schematic!(@key $field $($key)?)),
                        <$field_ty as $crate::Schematic>::schema(),
                    );
                )*
                $crate::SchemaNode::object(fields)
            }
        }

        impl $crate::Modifiable for $ty {}
    };
}
