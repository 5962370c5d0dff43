//! Array-backed binary heap.

use super::types::{EmptyHeap, OrderingPolicy};

/// A binary heap ordered by an injected [`OrderingPolicy`].
///
/// The backing storage is a `Vec<T>` holding an implicit binary tree:
/// the children of index `i` live at `2i + 1` and `2i + 2`, the parent of
/// index `i > 0` at `(i - 1) / 2`. After every public mutation, no element
/// outranks its parent under the bound policy.
///
/// The policy is fixed at construction. Re-ranking under a different
/// policy means building a new heap and re-inserting — a heap whose
/// policy changed underfoot would silently lose its ordering invariant.
///
/// Elements moved in via [`insert`](Self::insert) are owned by the heap
/// until [`extract_top`](Self::extract_top) moves them back out.
///
/// # Examples
///
/// ```
/// use rankheap::heap::{MaxPolicy, PriorityHeap};
///
/// let mut heap = PriorityHeap::new(MaxPolicy);
/// for n in [3, 1, 4] {
///     heap.insert(n);
/// }
/// assert_eq!(heap.peek(), Ok(&4));
/// assert_eq!(heap.extract_top(), Ok(4));
/// assert_eq!(heap.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<T, P: OrderingPolicy<T>> {
    elements: Vec<T>,
    policy: P,
}

impl<T, P: OrderingPolicy<T>> PriorityHeap<T, P> {
    /// Creates an empty heap bound to `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            elements: Vec::new(),
            policy,
        }
    }

    /// Creates an empty heap with room for `capacity` elements before
    /// the backing storage reallocates.
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            policy,
        }
    }

    /// Builds a heap by inserting every item from `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rankheap::heap::{MinPolicy, PriorityHeap};
    ///
    /// let heap = PriorityHeap::from_items(MinPolicy, [9, 2, 5]);
    /// assert_eq!(heap.peek(), Ok(&2));
    /// ```
    pub fn from_items<I: IntoIterator<Item = T>>(policy: P, items: I) -> Self {
        let iter = items.into_iter();
        let mut heap = Self::with_capacity(policy, iter.size_hint().0);
        for item in iter {
            heap.insert(item);
        }
        heap
    }

    /// Returns the bound ordering policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the current number of elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts `item`, restoring the heap ordering upward.
    ///
    /// Never fails; O(log n) swaps worst case.
    pub fn insert(&mut self, item: T) {
        self.elements.push(item);
        self.heapify_up(self.elements.len() - 1);
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.elements.first().ok_or(EmptyHeap)
    }

    /// Removes and returns the top element, restoring the heap ordering
    /// downward.
    ///
    /// The last element moves into the root slot and sinks until neither
    /// child outranks it. Fails with [`EmptyHeap`] on a heap of count 0,
    /// leaving the heap untouched.
    pub fn extract_top(&mut self) -> Result<T, EmptyHeap> {
        let mut top = self.elements.pop().ok_or(EmptyHeap)?;
        if !self.elements.is_empty() {
            std::mem::swap(&mut self.elements[0], &mut top);
            self.heapify_down(0);
        }
        Ok(top)
    }

    /// Iterates over the elements in unspecified (storage) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Drains the heap into a vector ordered top-first.
    ///
    /// Equivalent to calling [`extract_top`](Self::extract_top) until
    /// empty; tie order among equal-rank elements is unspecified.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Ok(top) = self.extract_top() {
            sorted.push(top);
        }
        sorted
    }

    /// Sifts the element at `index` toward the root until its parent
    /// outranks it.
    fn heapify_up(&mut self, index: usize) {
        let mut current = index;
        while current > 0 {
            let parent = (current - 1) / 2;
            if self
                .policy
                .higher_priority(&self.elements[parent], &self.elements[current])
            {
                break;
            }
            self.elements.swap(parent, current);
            current = parent;
        }
    }

    /// Sinks the element at `index` until it outranks its dominant child.
    ///
    /// The dominant child is whichever child the policy ranks higher;
    /// the same selection applies regardless of policy direction.
    fn heapify_down(&mut self, index: usize) {
        let mut current = index;
        loop {
            let left = 2 * current + 1;
            let right = 2 * current + 2;
            if left >= self.elements.len() {
                break;
            }

            let mut dominant = left;
            if right < self.elements.len()
                && self
                    .policy
                    .higher_priority(&self.elements[right], &self.elements[left])
            {
                dominant = right;
            }

            if self
                .policy
                .higher_priority(&self.elements[current], &self.elements[dominant])
            {
                break;
            }
            self.elements.swap(current, dominant);
            current = dominant;
        }
    }
}

impl<T, P: OrderingPolicy<T>> Extend<T> for PriorityHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, P: OrderingPolicy<T>> IntoIterator for &'a PriorityHeap<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::{FnPolicy, MaxPolicy, MinPolicy};
    use proptest::prelude::*;

    /// Checks that no element outranks its parent.
    fn assert_heap_property<T, P: OrderingPolicy<T>>(heap: &PriorityHeap<T, P>) {
        for i in 1..heap.elements.len() {
            let parent = (i - 1) / 2;
            assert!(
                heap.policy
                    .higher_priority(&heap.elements[parent], &heap.elements[i]),
                "element at {i} outranks its parent at {parent}"
            );
        }
    }

    #[test]
    fn test_max_heap_scenario() {
        let mut heap = PriorityHeap::new(MaxPolicy);
        for n in [3, 1, 4, 2, 5] {
            heap.insert(n);
        }

        let mut drained = Vec::new();
        while let Ok(top) = heap.extract_top() {
            drained.push(top);
        }
        assert_eq!(drained, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_min_heap_scenario() {
        let mut heap = PriorityHeap::new(MinPolicy);
        for n in [3, 1, 4, 2, 5] {
            heap.insert(n);
        }

        let mut drained = Vec::new();
        while let Ok(top) = heap.extract_top() {
            drained.push(top);
        }
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut heap = PriorityHeap::new(MaxPolicy);
        heap.insert(7);
        heap.insert(11);

        assert_eq!(heap.peek(), Ok(&11));
        assert_eq!(heap.peek(), Ok(&11));
        assert_eq!(heap.count(), 2);
    }

    #[test]
    fn test_empty_heap_signaling() {
        let mut heap: PriorityHeap<i32, MaxPolicy> = PriorityHeap::new(MaxPolicy);

        assert_eq!(heap.peek(), Err(EmptyHeap));
        assert_eq!(heap.extract_top(), Err(EmptyHeap));
        assert_eq!(heap.count(), 0);

        // Drained back to zero behaves the same as freshly constructed.
        heap.insert(1);
        assert_eq!(heap.extract_top(), Ok(1));
        assert_eq!(heap.extract_top(), Err(EmptyHeap));
        assert_eq!(heap.count(), 0);
    }

    #[test]
    fn test_count_conservation() {
        let mut heap = PriorityHeap::new(MinPolicy);
        for n in 0..10 {
            heap.insert(n);
        }
        assert_eq!(heap.count(), 10);

        for _ in 0..4 {
            heap.extract_top().unwrap();
        }
        assert_eq!(heap.count(), 6);
    }

    #[test]
    fn test_from_items_bulk_load() {
        let heap = PriorityHeap::from_items(MaxPolicy, vec![2, 9, 4, 9, 1]);
        assert_eq!(heap.count(), 5);
        assert_eq!(heap.peek(), Ok(&9));
        assert_heap_property(&heap);
    }

    #[test]
    fn test_extend() {
        let mut heap = PriorityHeap::from_items(MinPolicy, [5, 3]);
        heap.extend([4, 1]);
        assert_eq!(heap.count(), 4);
        assert_eq!(heap.peek(), Ok(&1));
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = PriorityHeap::from_items(MinPolicy, [6, 2, 8, 2, 0]);
        assert_eq!(heap.into_sorted_vec(), vec![0, 2, 2, 6, 8]);
    }

    #[test]
    fn test_iter_visits_all_elements() {
        let heap = PriorityHeap::from_items(MaxPolicy, [4, 7, 1]);
        let mut seen: Vec<i32> = heap.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 4, 7]);
    }

    #[test]
    fn test_duplicates_all_extracted() {
        let heap = PriorityHeap::from_items(MaxPolicy, [3, 3, 3, 1, 5, 5]);
        assert_eq!(heap.into_sorted_vec(), vec![5, 5, 3, 3, 3, 1]);
    }

    #[test]
    fn test_closure_policy_ordering() {
        // Closest to zero wins.
        let policy = FnPolicy::new("ClosestToZero", |a: &i64, b: &i64| a.abs() <= b.abs());
        let heap = PriorityHeap::from_items(policy, [-8, 3, -1, 6]);
        assert_eq!(heap.into_sorted_vec(), vec![-1, 3, 6, -8]);
    }

    proptest! {
        /// The heap property holds after any interleaving of inserts and
        /// extracts, and every extract returns the minimum of a reference
        /// multiset.
        #[test]
        fn prop_interleaved_ops_match_reference(ops in proptest::collection::vec(
            prop_oneof![
                (0i32..1000).prop_map(Some), // insert
                Just(None),                  // extract
            ],
            0..200,
        )) {
            let mut heap = PriorityHeap::new(MinPolicy);
            let mut reference: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Some(n) => {
                        heap.insert(n);
                        reference.push(n);
                    }
                    None => {
                        let extracted = heap.extract_top();
                        if reference.is_empty() {
                            prop_assert_eq!(extracted, Err(EmptyHeap));
                        } else {
                            let min = *reference.iter().min().unwrap();
                            prop_assert_eq!(extracted, Ok(min));
                            let pos = reference.iter().position(|&n| n == min).unwrap();
                            reference.swap_remove(pos);
                        }
                    }
                }
                assert_heap_property(&heap);
                prop_assert_eq!(heap.count(), reference.len());
            }
        }

        /// Inserting N elements then draining yields a non-increasing
        /// sequence under the bound policy (max order here).
        #[test]
        fn prop_sorted_extraction(mut values in proptest::collection::vec(any::<i32>(), 0..100)) {
            let heap = PriorityHeap::from_items(MaxPolicy, values.clone());
            let drained = heap.into_sorted_vec();

            values.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(drained, values);
        }
    }
}
