//! Types of literal JSON values.
//!
//! Used for `fromJSON('...')` calls whose argument is a string literal: the
//! parsed document gives a precise shape instead of `any`.

use serde_json::Value;

use crate::merge::merge_all;
use crate::recursion::grow;
use crate::types::ExprType;

/// Type of a parsed JSON value.
///
/// Objects become strict objects over their members. An array's element type
/// is the merge of all its items, or `any` when it is empty.
pub fn type_of_json_value(value: &Value) -> ExprType {
    match value {
        Value::Null => ExprType::Null,
        Value::Bool(_) => ExprType::Bool,
        Value::Number(_) => ExprType::Number,
        Value::String(_) => ExprType::String,
        Value::Array(items) => {
            let elem = grow(|| merge_all(items.iter().map(type_of_json_value)));
            ExprType::array(elem.unwrap_or(ExprType::Any))
        }
        Value::Object(members) => grow(|| {
            ExprType::strict_object(
                members
                    .iter()
                    .map(|(name, member)| (name.as_str(), type_of_json_value(member))),
            )
        }),
    }
}

/// Type of a JSON document, or `None` if `src` is not valid JSON.
pub fn type_of_json_str(src: &str) -> Option<ExprType> {
    serde_json::from_str::<Value>(src)
        .ok()
        .map(|value| type_of_json_value(&value))
}

#[cfg(test)]
#[path = "../tests/json_tests.rs"]
mod tests;
