//! Joining the types observed on different control-flow paths.
//!
//! `merge(a, b)` is the single type describing a value that is statically
//! either `a` or `b`. It never fails: a pairing that cannot be reconciled
//! widens to `any`, after which the inferencer stops reporting property-level
//! problems for that subtree.
//!
//! | left \ right        | result                                          |
//! |---------------------|-------------------------------------------------|
//! | `any` / anything    | `any`                                           |
//! | `null` / `null`     | `null`                                          |
//! | `null` / other      | `any`                                           |
//! | scalar / scalar     | itself when equal, otherwise `string`           |
//! | array / array       | `array<merge(elems)>`, deref only if both were  |
//! | object / object     | see [`TypeMerger::merge_objects`]               |
//! | mixed families      | `any`                                           |

use tracing::{debug, trace};

use crate::recursion::{DepthGuard, RecursionProfile, RecursionResult, grow};
use crate::types::{ArrayType, ExprType, ObjectType, Props};

/// Merges types under a depth guard.
#[derive(Debug)]
pub struct TypeMerger {
    guard: DepthGuard,
}

impl Default for TypeMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMerger {
    pub fn new() -> Self {
        Self::with_profile(RecursionProfile::Merge)
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self {
            guard: DepthGuard::with_profile(profile),
        }
    }

    /// Returns `true` once a merge through this merger hit a limit.
    pub fn is_exceeded(&self) -> bool {
        self.guard.is_exceeded()
    }

    /// Join `a` and `b`. Always allocates a fresh value.
    pub fn merge(&mut self, a: &ExprType, b: &ExprType) -> ExprType {
        match self.guard.enter() {
            RecursionResult::Entered => {}
            denied => {
                debug!(
                    left = a.kind_name(),
                    right = b.kind_name(),
                    depth = self.guard.depth(),
                    reason = ?denied,
                    "merge walk limit reached, widening to any"
                );
                return ExprType::Any;
            }
        }

        let result = grow(|| self.merge_inner(a, b));
        self.guard.leave();
        result
    }

    fn merge_inner(&mut self, a: &ExprType, b: &ExprType) -> ExprType {
        match (a, b) {
            (ExprType::Any, _) | (_, ExprType::Any) => ExprType::Any,
            (ExprType::Null, ExprType::Null) => ExprType::Null,
            (ExprType::Null, _) | (_, ExprType::Null) => widen(a, b),
            (ExprType::Number, ExprType::Number) => ExprType::Number,
            (ExprType::Bool, ExprType::Bool) => ExprType::Bool,
            // Distinct scalars meet at string.
            (
                ExprType::Number | ExprType::Bool | ExprType::String,
                ExprType::Number | ExprType::Bool | ExprType::String,
            ) => ExprType::String,
            (ExprType::Object(x), ExprType::Object(y)) => {
                ExprType::Object(self.merge_objects(x, y))
            }
            (ExprType::Array(x), ExprType::Array(y)) => ExprType::Array(ArrayType {
                elem: Box::new(self.merge(&x.elem, &y.elem)),
                deref: x.deref && y.deref,
            }),
            (ExprType::Object(_) | ExprType::Array(_), _)
            | (_, ExprType::Object(_) | ExprType::Array(_)) => widen(a, b),
        }
    }

    /// Join two object shapes.
    ///
    /// - Two maps join their value types; if that widens to `any` the result is
    ///   the fully-open empty object rather than a map of `any`.
    /// - A map against declared properties keeps those properties unchanged and
    ///   the result is open.
    /// - Otherwise properties are unioned (shared names merged) and the result
    ///   is strict only when both sides were.
    pub fn merge_objects(&mut self, a: &ObjectType, b: &ObjectType) -> ObjectType {
        match (a, b) {
            (ObjectType::Map(x), ObjectType::Map(y)) => match self.merge(x, y) {
                ExprType::Any => {
                    trace!(
                        left = x.kind_name(),
                        right = y.kind_name(),
                        "map value types do not merge, falling back to open object"
                    );
                    ObjectType::Open(Props::new())
                }
                value => ObjectType::Map(Box::new(value)),
            },
            (ObjectType::Map(_), ObjectType::Open(props) | ObjectType::Strict(props))
            | (ObjectType::Open(props) | ObjectType::Strict(props), ObjectType::Map(_)) => {
                ObjectType::Open(props.clone())
            }
            (
                ObjectType::Open(x) | ObjectType::Strict(x),
                ObjectType::Open(y) | ObjectType::Strict(y),
            ) => {
                let props = self.merge_props(x, y);
                if a.is_strict() && b.is_strict() {
                    ObjectType::Strict(props)
                } else {
                    ObjectType::Open(props)
                }
            }
        }
    }

    fn merge_props(&mut self, x: &Props, y: &Props) -> Props {
        let mut props = Props::with_capacity(x.len() + y.len());
        for (name, ty) in x {
            let merged = match y.get(name) {
                Some(other) => self.merge(ty, other),
                None => ty.clone(),
            };
            props.insert(name.clone(), merged);
        }
        for (name, ty) in y {
            props.entry(name.clone()).or_insert_with(|| ty.clone());
        }
        props
    }
}

fn widen(a: &ExprType, b: &ExprType) -> ExprType {
    trace!(
        left = a.kind_name(),
        right = b.kind_name(),
        "incompatible types merged to any"
    );
    ExprType::Any
}

/// Join `a` and `b` with default limits.
pub fn merge_types(a: &ExprType, b: &ExprType) -> ExprType {
    TypeMerger::new().merge(a, b)
}

/// Left fold of [`merge_types`]; `None` for an empty sequence.
///
/// Each step gets a fresh guard, so a long sequence of shallow types is never
/// cut short by the iteration budget.
pub fn merge_all(types: impl IntoIterator<Item = ExprType>) -> Option<ExprType> {
    types.into_iter().reduce(|acc, ty| merge_types(&acc, &ty))
}

impl ExprType {
    /// Join with `other`. Neither operand is modified.
    pub fn merge(&self, other: &ExprType) -> ExprType {
        merge_types(self, other)
    }
}

#[cfg(test)]
#[path = "../tests/merge_tests.rs"]
mod tests;
