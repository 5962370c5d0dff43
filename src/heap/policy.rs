//! Built-in ordering policies.

use super::types::OrderingPolicy;

/// Ranks greater elements higher under `T`'s natural order.
///
/// Ties answer `true` in both directions, so extraction order among equal
/// elements is unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPolicy;

impl<T: Ord> OrderingPolicy<T> for MaxPolicy {
    fn name(&self) -> &str {
        "Max"
    }

    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Ranks smaller elements higher under `T`'s natural order.
///
/// Mirror of [`MaxPolicy`], with the same unspecified tie order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinPolicy;

impl<T: Ord> OrderingPolicy<T> for MinPolicy {
    fn name(&self) -> &str {
        "Min"
    }

    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Adapts a closure into an [`OrderingPolicy`].
///
/// The closure carries the same strict-weak-ordering obligation as any
/// other policy.
///
/// # Examples
///
/// ```
/// use rankheap::heap::{FnPolicy, PriorityHeap};
///
/// // Closest to zero on top.
/// let mut heap = PriorityHeap::new(FnPolicy::new("ClosestToZero", |a: &i64, b: &i64| {
///     a.abs() <= b.abs()
/// }));
/// heap.insert(-7);
/// heap.insert(3);
/// assert_eq!(heap.extract_top(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct FnPolicy<F> {
    name: String,
    compare: F,
}

impl<F> FnPolicy<F> {
    /// Wraps `compare` as a named policy.
    pub fn new(name: impl Into<String>, compare: F) -> Self {
        Self {
            name: name.into(),
            compare,
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> OrderingPolicy<T> for FnPolicy<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn higher_priority(&self, a: &T, b: &T) -> bool {
        (self.compare)(a, b)
    }
}
