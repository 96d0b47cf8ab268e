//! Rendering types for diagnostics.
//!
//! Strict objects spell out their properties in sorted order; every other
//! object is just `object`. Arrays never show the deref flag.

use std::fmt;

use crate::recursion::grow;
use crate::types::{ArrayType, ExprType, ObjectType};

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprType::Any => f.write_str("any"),
            ExprType::Null => f.write_str("null"),
            ExprType::Number => f.write_str("number"),
            ExprType::Bool => f.write_str("bool"),
            ExprType::String => f.write_str("string"),
            ExprType::Object(obj) => fmt::Display::fmt(obj, f),
            ExprType::Array(arr) => fmt::Display::fmt(arr, f),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = match self {
            ObjectType::Strict(props) => props,
            ObjectType::Open(_) | ObjectType::Map(_) => return f.write_str("object"),
        };

        let mut entries: Vec<_> = props.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        f.write_str("{")?;
        for (i, (name, ty)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: ")?;
            grow(|| fmt::Display::fmt(ty, f))?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array<")?;
        grow(|| fmt::Display::fmt(&*self.elem, f))?;
        f.write_str(">")
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
