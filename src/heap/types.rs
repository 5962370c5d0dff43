//! Core trait for ordering policies.

use std::error::Error;
use std::fmt;

/// A two-element comparison that decides which element outranks the other.
///
/// `higher_priority(a, b)` answers "may `a` sit above `b`" — closer to the
/// root of the heap. The derived "neither outranks the other" relation must
/// behave as the equivalence of a strict weak ordering: the policy must be
/// transitive, and its ties must be transitive too. Policies that violate
/// this are never detected at runtime (a per-operation check would cost
/// O(n) and defeat the structure); extraction order simply becomes
/// unspecified. Memory safety is unaffected either way.
///
/// Built-in policies answer `true` on ties ("either may sit on top"). A
/// strict policy — `false` on ties — works equally well and yields the
/// same extraction order for any valid strict weak order, at the cost of
/// a few extra swaps among tied elements.
///
/// # Examples
///
/// ```
/// use rankheap::heap::OrderingPolicy;
///
/// // Rank strings by length, longest on top.
/// struct LongestFirst;
///
/// impl OrderingPolicy<String> for LongestFirst {
///     fn name(&self) -> &str {
///         "LongestFirst"
///     }
///     fn higher_priority(&self, a: &String, b: &String) -> bool {
///         a.len() >= b.len()
///     }
/// }
/// ```
pub trait OrderingPolicy<T> {
    /// Returns the name of this policy.
    fn name(&self) -> &str;

    /// Returns `true` iff `a` may sit above `b` in the heap.
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

/// Error returned by `peek` and `extract_top` on a heap with no elements.
///
/// Always recoverable: check `count()` first, or handle the error. The
/// heap is left untouched (count stays 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl Error for EmptyHeap {}
