//! Algorithm constants (internal).
//!
//! Policy
//! - Fixed constants; the recursion and strip scan are only proven for these
//!   shapes, so they are not caller-tunable.

/// Largest sub-problem solved by all-pairs brute force instead of recursing.
pub(crate) const BASE_CASE_MAX: usize = 3;
/// How many y-ordered successors each strip point is compared against.
///
/// A `δ × 2δ` box above a strip point holds at most 8 points that are pairwise
/// `≥ δ` apart within each half, so 7 successors cover every candidate.
pub(crate) const STRIP_WINDOW: usize = 7;
