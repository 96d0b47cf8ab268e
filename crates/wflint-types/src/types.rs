//! Expression type representation.
//!
//! `ExprType` is the closed family of value shapes an embedded `${{ ... }}`
//! expression can produce. Objects come in three cases:
//!
//! - **Open** (`Open`): known properties; any unlisted property is `any`.
//!   With no properties this is the fully-open empty object, the practical
//!   top of the object family.
//! - **Strict** (`Strict`): exactly the listed properties.
//! - **Map** (`Map`): no declared names; every property has one value type.
//!   Models namespaces with dynamic keys such as `env` or `secrets`.
//!
//! Values are plain immutable data. Every operation in this crate borrows its
//! operands and allocates a new result, so a fully built type can be shared
//! freely across threads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared properties of an object type, keyed by property name.
///
/// Insertion order is kept for debug output; equality ignores order.
pub type Props = IndexMap<String, ExprType>;

/// Type of a value produced or consumed by an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "shape", rename_all = "lowercase")]
pub enum ExprType {
    /// Unknown or unconstrained value. Absorbs everything in both directions.
    Any,
    /// The literal `null`.
    Null,
    Number,
    Bool,
    String,
    Object(ObjectType),
    Array(ArrayType),
}

/// Shape of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Known properties; unlisted properties are implicitly `any`.
    Open(Props),
    /// Exactly the listed properties; anything else is an error.
    Strict(Props),
    /// Every property, known or not, has the given type.
    Map(Box<ExprType>),
}

/// Sequence type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayType {
    pub elem: Box<ExprType>,
    /// Set when the array was produced by an object filter (`foo.*.bar`)
    /// rather than a literal sequence.
    pub deref: bool,
}

/// How an object type answers for a single property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropLookup<'a> {
    /// The property is listed explicitly.
    Declared(&'a ExprType),
    /// The property is covered by a map object's value type.
    Mapped(&'a ExprType),
    /// Not listed on an open object, so implicitly `any`.
    Implicit,
    /// Not listed on a strict object.
    Missing,
}

impl PropLookup<'_> {
    /// The resolved property type, or `None` when the property cannot exist.
    pub fn resolved(self) -> Option<ExprType> {
        match self {
            PropLookup::Declared(ty) | PropLookup::Mapped(ty) => Some(ty.clone()),
            PropLookup::Implicit => Some(ExprType::Any),
            PropLookup::Missing => None,
        }
    }
}

fn collect_props<K: Into<String>>(props: impl IntoIterator<Item = (K, ExprType)>) -> Props {
    props
        .into_iter()
        .map(|(name, ty)| (name.into(), ty))
        .collect()
}

impl ExprType {
    /// Open object with the given properties.
    pub fn object<K: Into<String>>(props: impl IntoIterator<Item = (K, ExprType)>) -> Self {
        ExprType::Object(ObjectType::open(props))
    }

    /// Strict (closed) object with exactly the given properties.
    pub fn strict_object<K: Into<String>>(props: impl IntoIterator<Item = (K, ExprType)>) -> Self {
        ExprType::Object(ObjectType::strict(props))
    }

    /// Map object whose every property has type `value`.
    pub fn map_object(value: ExprType) -> Self {
        ExprType::Object(ObjectType::map(value))
    }

    /// Fully-open empty object: no constraints at all.
    pub fn empty_object() -> Self {
        ExprType::Object(ObjectType::Open(Props::new()))
    }

    /// Strict object with no properties, rendered as `{}`.
    pub fn empty_strict_object() -> Self {
        ExprType::Object(ObjectType::Strict(Props::new()))
    }

    pub fn array(elem: ExprType) -> Self {
        Self::array_with(elem, false)
    }

    /// Array produced by an object filter.
    pub fn array_deref(elem: ExprType) -> Self {
        Self::array_with(elem, true)
    }

    pub fn array_with(elem: ExprType, deref: bool) -> Self {
        ExprType::Array(ArrayType::new(elem, deref))
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, ExprType::Any)
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            ExprType::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            ExprType::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Static name of the variant family, for log fields.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExprType::Any => "any",
            ExprType::Null => "null",
            ExprType::Number => "number",
            ExprType::Bool => "bool",
            ExprType::String => "string",
            ExprType::Object(ObjectType::Open(_)) => "object",
            ExprType::Object(ObjectType::Strict(_)) => "strict object",
            ExprType::Object(ObjectType::Map(_)) => "map object",
            ExprType::Array(_) => "array",
        }
    }
}

impl From<ObjectType> for ExprType {
    fn from(obj: ObjectType) -> Self {
        ExprType::Object(obj)
    }
}

impl From<ArrayType> for ExprType {
    fn from(arr: ArrayType) -> Self {
        ExprType::Array(arr)
    }
}

impl ObjectType {
    pub fn open<K: Into<String>>(props: impl IntoIterator<Item = (K, ExprType)>) -> Self {
        ObjectType::Open(collect_props(props))
    }

    pub fn strict<K: Into<String>>(props: impl IntoIterator<Item = (K, ExprType)>) -> Self {
        ObjectType::Strict(collect_props(props))
    }

    pub fn map(value: ExprType) -> Self {
        ObjectType::Map(Box::new(value))
    }

    /// Resolve the type of property `name`.
    pub fn lookup(&self, name: &str) -> PropLookup<'_> {
        match self {
            ObjectType::Open(props) => props
                .get(name)
                .map_or(PropLookup::Implicit, PropLookup::Declared),
            ObjectType::Strict(props) => props
                .get(name)
                .map_or(PropLookup::Missing, PropLookup::Declared),
            ObjectType::Map(value) => PropLookup::Mapped(value),
        }
    }

    /// Type of property `name`, or `None` when a strict object lacks it.
    pub fn prop_type(&self, name: &str) -> Option<ExprType> {
        self.lookup(name).resolved()
    }

    /// Explicitly declared properties. Map objects declare none.
    pub fn props(&self) -> Option<&Props> {
        match self {
            ObjectType::Open(props) | ObjectType::Strict(props) => Some(props),
            ObjectType::Map(_) => None,
        }
    }

    /// Iterate declared properties; empty for map objects.
    pub fn declared(&self) -> impl Iterator<Item = (&String, &ExprType)> {
        self.props().into_iter().flatten()
    }

    /// Value type of a map object.
    pub fn mapped(&self) -> Option<&ExprType> {
        match self {
            ObjectType::Map(value) => Some(value),
            ObjectType::Open(_) | ObjectType::Strict(_) => None,
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, ObjectType::Strict(_))
    }

    #[inline]
    pub fn is_loose(&self) -> bool {
        !self.is_strict()
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, ObjectType::Map(_))
    }

    /// Close an open object over its declared properties.
    ///
    /// Map objects stay maps: a closed object never carries a uniform
    /// fallback type.
    pub fn into_strict(self) -> Self {
        match self {
            ObjectType::Open(props) => ObjectType::Strict(props),
            other => other,
        }
    }

    /// Reopen a strict object so unlisted properties become `any`.
    pub fn into_loose(self) -> Self {
        match self {
            ObjectType::Strict(props) => ObjectType::Open(props),
            other => other,
        }
    }
}

impl ArrayType {
    pub fn new(elem: ExprType, deref: bool) -> Self {
        Self {
            elem: Box::new(elem),
            deref,
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
