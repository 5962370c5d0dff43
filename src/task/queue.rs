//! Task selection queue.

use super::policy::DueDistanceThenPriority;
use super::types::{Day, TaskItem};
use crate::heap::PriorityHeap;

/// Answers "which task to act on next" for a pool of open tasks.
///
/// Wraps a [`PriorityHeap`] bound to [`DueDistanceThenPriority`].
/// Completed tasks are dropped on the way in; they have no rank to
/// compete for. At this layer an empty pool is an ordinary state rather
/// than an error, so lookups return `Option`.
///
/// # Examples
///
/// ```
/// use rankheap::task::{Priority, TaskItem, TaskQueue};
///
/// let mut queue = TaskQueue::from_tasks(
///     100,
///     vec![
///         TaskItem::new("Team meeting", 102),
///         TaskItem::new("Complete project", 101).with_priority(Priority::High),
///     ],
/// );
///
/// assert_eq!(queue.current().unwrap().title, "Complete project");
/// let next = queue.take_next().unwrap();
/// assert_eq!(next.title, "Complete project");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TaskQueue {
    heap: PriorityHeap<TaskItem, DueDistanceThenPriority>,
}

impl TaskQueue {
    /// Creates an empty queue ranking against the given day.
    pub fn new(today: Day) -> Self {
        Self {
            heap: PriorityHeap::new(DueDistanceThenPriority::new(today)),
        }
    }

    /// Builds a queue from a collection of tasks.
    ///
    /// Completed tasks are skipped.
    pub fn from_tasks<I: IntoIterator<Item = TaskItem>>(today: Day, tasks: I) -> Self {
        let mut queue = Self::new(today);
        for task in tasks {
            queue.add(task);
        }
        queue
    }

    /// Adds an open task to the pool. Completed tasks are ignored.
    pub fn add(&mut self, task: TaskItem) {
        if !task.is_completed() {
            self.heap.insert(task);
        }
    }

    /// Returns the reference day this queue ranks against.
    pub fn today(&self) -> Day {
        self.heap.policy().today()
    }

    /// Returns the next task to act on without removing it.
    pub fn current(&self) -> Option<&TaskItem> {
        self.heap.peek().ok()
    }

    /// Removes and returns the next task to act on.
    pub fn take_next(&mut self) -> Option<TaskItem> {
        self.heap.extract_top().ok()
    }

    /// Returns the number of open tasks in the pool.
    pub fn len(&self) -> usize {
        self.heap.count()
    }

    /// Returns `true` when no open tasks remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains the pool in selection order.
    pub fn into_ranked_vec(self) -> Vec<TaskItem> {
        self.heap.into_sorted_vec()
    }
}
