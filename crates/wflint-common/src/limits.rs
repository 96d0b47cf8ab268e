//! Centralized limits for recursive walks over expression types.
//!
//! Expression types mirror the finite syntax of `${{ ... }}` fragments, so in
//! practice they are a handful of levels deep. These limits only matter for
//! adversarial inputs such as a `fromJSON` literal nested thousands of levels.
//!
//! The type crate exposes them through
//! `wflint_types::recursion::RecursionProfile`; prefer the profile at call
//! sites and use the constants here to tune the values.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for assignability checks.
///
/// Each object property or array element visited adds one level. When the
/// limit is hit the check answers `true`, so a pathologically deep shape never
/// produces a diagnostic it could not justify. Walks run on a growable stack,
/// so the limit sits well above any nesting a workflow file can spell out
/// (`serde_json` itself stops parsing at 128 levels).
///
/// ```text
/// ${{ fromJSON('{"a":{"a":{"a": ... 300 levels ... }}}').a.a.a }}
/// ```
pub const MAX_TYPE_RELATION_DEPTH: u32 = 4_096;

/// Maximum nesting depth for merging two types.
///
/// Exceeding it widens the remaining subtree to `any`.
pub const MAX_TYPE_MERGE_DEPTH: u32 = 4_096;

// =============================================================================
// Operation Count Limits
// =============================================================================

/// Maximum number of nodes a single relation or merge walk may visit.
///
/// Bounds the work done on very wide objects (e.g. a `fromJSON` literal with
/// hundreds of thousands of keys) in addition to the depth limit.
pub const MAX_TYPE_WALK_ITERATIONS: u32 = 1_000_000;

// =============================================================================
// Native Stack Growth
// =============================================================================

/// Remaining stack below which a recursive walk grows the stack.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment allocated by a recursive walk.
pub const STACK_GROWTH_SIZE: usize = 1024 * 1024;
