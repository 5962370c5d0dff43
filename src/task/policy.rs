//! Composite ordering policy for task selection.

use super::types::{Day, TaskItem};
use crate::heap::OrderingPolicy;

/// Ranks tasks by closeness of due date, ties broken by declared priority.
///
/// The task whose due day lies closest to `today` (by absolute distance,
/// so a task two days overdue ties a task due in two days) sits on top.
/// On an exact distance tie the higher [`Priority`](super::Priority)
/// wins; when both tie, order is unspecified.
///
/// `today` is captured at construction. Ranking against a later day means
/// constructing a new policy and a new heap — the heap's ordering is only
/// valid for the policy it was built with.
///
/// # Examples
///
/// ```
/// use rankheap::heap::PriorityHeap;
/// use rankheap::task::{DueDistanceThenPriority, Priority, TaskItem};
///
/// let mut heap = PriorityHeap::new(DueDistanceThenPriority::new(100));
/// heap.insert(TaskItem::new("Team meeting", 102));
/// heap.insert(TaskItem::new("Complete project", 101).with_priority(Priority::High));
///
/// assert_eq!(heap.peek().unwrap().title, "Complete project");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DueDistanceThenPriority {
    today: Day,
}

impl DueDistanceThenPriority {
    /// Creates a policy ranking against the given reference day.
    pub fn new(today: Day) -> Self {
        Self { today }
    }

    /// Returns the reference day this policy ranks against.
    pub fn today(&self) -> Day {
        self.today
    }
}

impl OrderingPolicy<TaskItem> for DueDistanceThenPriority {
    fn name(&self) -> &str {
        "DueDistanceThenPriority"
    }

    fn higher_priority(&self, a: &TaskItem, b: &TaskItem) -> bool {
        let da = a.due_distance(self.today);
        let db = b.due_distance(self.today);
        if da != db {
            da < db
        } else {
            a.priority >= b.priority
        }
    }
}
