//! Summary statistics and detail formatting over task slices.
//!
//! Pure functions for the display side of task selection. Nothing here
//! assumes a particular tie-break outcome among equal-rank tasks; callers
//! rendering a ranked sequence must tolerate equal-rank tasks appearing
//! in any order.

use super::types::{Day, Priority, TaskItem};
use std::fmt::Write;

/// Per-level task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityCounts {
    /// Total tasks counted.
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Counts tasks per declared priority level.
pub fn count_by_priority(tasks: &[TaskItem]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for task in tasks {
        match task.priority {
            Priority::Low => counts.low += 1,
            Priority::Medium => counts.medium += 1,
            Priority::High => counts.high += 1,
        }
    }
    counts
}

/// Returns the tasks whose due day falls in `from..=to`.
pub fn due_between(tasks: &[TaskItem], from: Day, to: Day) -> Vec<&TaskItem> {
    tasks
        .iter()
        .filter(|t| t.due >= from && t.due <= to)
        .collect()
}

/// Returns the open tasks whose due day lies strictly before `today`.
pub fn overdue(tasks: &[TaskItem], today: Day) -> Vec<&TaskItem> {
    tasks.iter().filter(|t| t.is_overdue(today)).collect()
}

/// Renders a multi-line detail block for one task.
///
/// # Examples
///
/// ```
/// use rankheap::task::{report, Priority, TaskItem};
///
/// let task = TaskItem::new("Team meeting", 102).with_priority(Priority::Medium);
/// let block = report::task_details(&task);
/// assert!(block.starts_with("Title: Team meeting\n"));
/// ```
pub fn task_details(task: &TaskItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Title: {}", task.title);
    let _ = writeln!(out, "Description: {}", task.description);
    let _ = writeln!(out, "Creation Day: {}", task.created);
    let _ = writeln!(out, "Due Day: {}", task.due);
    let _ = writeln!(out, "Priority: {:?}", task.priority);
    if let Some(day) = task.completed {
        let _ = writeln!(out, "Completed Day: {day}");
    }
    out
}
