//! Expression Type Algebra
//!
//! Static approximation of the values produced and consumed by `${{ ... }}`
//! expressions in workflow files. The inferencer builds [`ExprType`] values
//! while walking an expression and calls into this crate to:
//!
//! - **Check** a value against an expected shape ([`is_assignable`])
//! - **Join** the types of two branches ([`merge_types`])
//! - **Compare** types ([`are_types_equal`])
//! - **Render** a type for a diagnostic (`Display`)
//!
//! All operations are total and pure. Types are immutable once built and can
//! be shared across threads.
mod format;
pub mod json;
pub mod merge;
pub mod recursion;
pub mod subtype;
pub mod types;

pub use json::{type_of_json_str, type_of_json_value};
pub use merge::{TypeMerger, merge_all, merge_types};
pub use recursion::{DepthGuard, RecursionProfile, RecursionResult};
pub use subtype::{AssignabilityChecker, are_types_equal, is_assignable};
pub use types::{ArrayType, ExprType, ObjectType, PropLookup, Props};

// Test modules: most are loaded by their source files via #[path = "../tests/..."].
// Only cross-cutting suites are declared here.
#[cfg(test)]
#[path = "../tests/concurrent_tests.rs"]
mod concurrent_tests;
#[cfg(test)]
#[path = "../tests/scenario_tests.rs"]
mod scenario_tests;
#[cfg(test)]
#[path = "../tests/type_law_tests.rs"]
mod type_law_tests;
