//! Assignability and equivalence of expression types.
//!
//! `to := from` holds when a value known to satisfy `from` may be used where
//! `to` is required. `any` absorbs on both sides, `string` additionally accepts
//! `number` and `bool` (implicit stringification), and objects are compared
//! structurally property by property:
//!
//! - every property declared by `to` must resolve on `from` (declared, mapped,
//!   or implicitly `any` on an open object) to an assignable type;
//! - a map target requires every property `from` exposes to fit its value type;
//! - a strict target rejects properties declared by `from` that it does not list.
//!
//! Equivalence is mutual assignability.

use tracing::debug;

use crate::recursion::{DepthGuard, RecursionProfile, RecursionResult, grow};
use crate::types::{ExprType, ObjectType, PropLookup, Props};

/// Checks `to := from` under a depth guard.
///
/// Create one per query; the guard's iteration budget spans every call made
/// through the same checker.
#[derive(Debug)]
pub struct AssignabilityChecker {
    guard: DepthGuard,
}

impl Default for AssignabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignabilityChecker {
    pub fn new() -> Self {
        Self::with_profile(RecursionProfile::Assignability)
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self {
            guard: DepthGuard::with_profile(profile),
        }
    }

    /// Returns `true` once a walk through this checker hit a limit.
    pub fn is_exceeded(&self) -> bool {
        self.guard.is_exceeded()
    }

    /// Whether a value of type `from` can be used where `to` is expected.
    ///
    /// Exhausting the guard answers `true`: past that point the shape is
    /// treated as unknown rather than reported, so answers for types nested
    /// deeper than the profile's depth limit are approximate.
    pub fn is_assignable(&mut self, to: &ExprType, from: &ExprType) -> bool {
        match self.guard.enter() {
            RecursionResult::Entered => {}
            denied => {
                debug!(
                    to = to.kind_name(),
                    from = from.kind_name(),
                    depth = self.guard.depth(),
                    reason = ?denied,
                    "assignability walk limit reached, assuming assignable"
                );
                return true;
            }
        }

        let result = grow(|| self.check(to, from));
        self.guard.leave();
        result
    }

    /// Mutual assignability.
    pub fn are_equal(&mut self, a: &ExprType, b: &ExprType) -> bool {
        self.is_assignable(a, b) && self.is_assignable(b, a)
    }

    fn check(&mut self, to: &ExprType, from: &ExprType) -> bool {
        match (to, from) {
            (ExprType::Any, _) | (_, ExprType::Any) => true,
            (ExprType::Null, from) => matches!(from, ExprType::Null),
            (ExprType::Number, from) => matches!(from, ExprType::Number),
            (ExprType::Bool, from) => matches!(from, ExprType::Bool),
            (ExprType::String, from) => {
                matches!(from, ExprType::String | ExprType::Number | ExprType::Bool)
            }
            (ExprType::Object(to), ExprType::Object(from)) => self.check_object(to, from),
            (ExprType::Object(_), _) => false,
            (ExprType::Array(to), ExprType::Array(from)) => {
                self.is_assignable(&to.elem, &from.elem)
            }
            (ExprType::Array(_), _) => false,
        }
    }

    fn check_object(&mut self, to: &ObjectType, from: &ObjectType) -> bool {
        match to {
            ObjectType::Map(value) => match from {
                ObjectType::Map(from_value) => self.is_assignable(value, from_value),
                ObjectType::Open(props) | ObjectType::Strict(props) => {
                    props.values().all(|prop| self.is_assignable(value, prop))
                }
            },
            ObjectType::Open(props) => self.check_declared_props(props, from),
            ObjectType::Strict(props) => {
                self.check_declared_props(props, from)
                    && from.declared().all(|(name, _)| props.contains_key(name))
            }
        }
    }

    fn check_declared_props(&mut self, props: &Props, from: &ObjectType) -> bool {
        props.iter().all(|(name, ty)| match from.lookup(name) {
            PropLookup::Declared(from_ty) | PropLookup::Mapped(from_ty) => {
                self.is_assignable(ty, from_ty)
            }
            PropLookup::Implicit => true,
            PropLookup::Missing => false,
        })
    }
}

/// `to := from` with default limits.
pub fn is_assignable(to: &ExprType, from: &ExprType) -> bool {
    AssignabilityChecker::new().is_assignable(to, from)
}

/// Mutual assignability with default limits.
pub fn are_types_equal(a: &ExprType, b: &ExprType) -> bool {
    AssignabilityChecker::new().are_equal(a, b)
}

impl ExprType {
    /// Whether a value of type `from` can be used where `self` is expected.
    pub fn assignable(&self, from: &ExprType) -> bool {
        is_assignable(self, from)
    }

    /// Mutual assignability.
    pub fn equals(&self, other: &ExprType) -> bool {
        are_types_equal(self, other)
    }
}

#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod tests;
