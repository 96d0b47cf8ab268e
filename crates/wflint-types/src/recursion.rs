//! Depth and work limits for recursive walks over expression types.
//!
//! The type grammar is acyclic, so unlike a solver for recursive types there
//! is no visiting set: a guard only bounds nesting depth and the total number
//! of nodes visited. Walks also run under [`grow`] so that nesting below the
//! limit never overflows the native stack.
//!
//! # Profiles
//!
//! [`RecursionProfile`] names the limits used by each walk:
//!
//! ```ignore
//! let mut guard = DepthGuard::with_profile(RecursionProfile::Merge);
//! ```
//!
//! # Safety
//!
//! - **Debug leak detection**: In debug builds, dropping a guard with active
//!   levels panics, catching forgotten `leave()` calls.
//! - **Overflow protection**: Iteration counting uses saturating arithmetic.

use wflint_common::limits;

// ---------------------------------------------------------------------------
// RecursionProfile
// ---------------------------------------------------------------------------

/// Named recursion limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Assignability and equality checks.
    ///
    /// depth = 4,096, iterations = 1,000,000
    Assignability,

    /// Merging types from different control-flow paths.
    ///
    /// depth = 4,096, iterations = 1,000,000
    Merge,

    /// Custom limits for one-off or test scenarios.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    /// Maximum recursion depth for this profile.
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Assignability => limits::MAX_TYPE_RELATION_DEPTH,
            Self::Merge => limits::MAX_TYPE_MERGE_DEPTH,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    /// Maximum iteration count for this profile.
    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::Assignability | Self::Merge => limits::MAX_TYPE_WALK_ITERATIONS,
            Self::Custom { max_iterations, .. } => max_iterations,
        }
    }
}

// ---------------------------------------------------------------------------
// RecursionResult
// ---------------------------------------------------------------------------

/// Result of attempting to enter one more level of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// Maximum iteration count exceeded.
    IterationExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    /// Returns `true` if any limit was exceeded (depth or iterations).
    #[inline]
    pub fn is_exceeded(self) -> bool {
        matches!(self, Self::DepthExceeded | Self::IterationExceeded)
    }
}

// ---------------------------------------------------------------------------
// DepthGuard
// ---------------------------------------------------------------------------

/// Tracks nesting depth and visited-node count for one walk.
///
/// # Usage
///
/// ```ignore
/// match guard.enter() {
///     RecursionResult::Entered => {
///         let result = do_work();
///         guard.leave();
///         result
///     }
///     RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => fallback(),
/// }
/// ```
#[derive(Debug)]
pub struct DepthGuard {
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl DepthGuard {
    /// Create a guard with explicit limits.
    ///
    /// Prefer [`with_profile`](Self::with_profile) for standard use cases.
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    /// Try to enter one more level.
    ///
    /// On [`RecursionResult::Entered`] the caller **must** call
    /// [`leave`](Self::leave) when done. On denial the depth is not
    /// incremented and `leave()` must not be called.
    pub fn enter(&mut self) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }

        self.depth += 1;
        RecursionResult::Entered
    }

    /// Leave the current level.
    ///
    /// # Debug panics
    ///
    /// In debug builds, panics if depth is already 0 (leave without enter).
    pub fn leave(&mut self) {
        debug_assert!(
            self.depth > 0,
            "DepthGuard::leave() called at depth 0. \
             This indicates a leave without a matching enter()."
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total enter attempts so far (successful or not).
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns `true` if any limit was previously exceeded.
    ///
    /// Sticky: stays `true` until [`reset`](Self::reset).
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Reset all state while preserving configured limits.
    pub fn reset(&mut self) {
        self.depth = 0;
        self.iterations = 0;
        self.exceeded = false;
    }
}

#[cfg(debug_assertions)]
impl Drop for DepthGuard {
    fn drop(&mut self) {
        if !std::thread::panicking() && self.depth > 0 {
            panic!(
                "DepthGuard dropped with depth {}. \
                 This indicates leaked enter() calls without matching leave() calls.",
                self.depth,
            );
        }
    }
}

/// Run `f`, growing the native stack first if it is close to exhausted.
#[inline]
pub fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(limits::STACK_RED_ZONE, limits::STACK_GROWTH_SIZE, f)
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
