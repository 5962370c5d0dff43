//! Task record and declared priority level.

/// A calendar day as a plain day number relative to an arbitrary epoch.
///
/// The ranking policies only consume day differences, so the epoch never
/// matters — callers pick one (Unix epoch days, a project-local day
/// counter) and use it consistently.
pub type Day = i64;

/// Declared priority level of a task.
///
/// Orders `Low < Medium < High` so that comparison operators read the way
/// the ranking uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A unit of work with a due day and a declared priority.
///
/// # Examples
///
/// ```
/// use rankheap::task::{Priority, TaskItem};
///
/// let task = TaskItem::new("Complete project", 100)
///     .with_description("Finish the priority task manager")
///     .with_created(90)
///     .with_priority(Priority::High);
///
/// assert!(!task.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskItem {
    /// Short title.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Day the task was recorded.
    pub created: Day,

    /// Day the task is due. May lie in the past.
    pub due: Day,

    /// Declared priority level.
    pub priority: Priority,

    /// Day the task was completed, if it has been.
    pub completed: Option<Day>,
}

impl TaskItem {
    /// Creates a task with the given title and due day.
    ///
    /// Description defaults to empty, creation day to the due day,
    /// priority to `Medium`, completion to none.
    pub fn new(title: impl Into<String>, due: Day) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            created: due,
            due,
            priority: Priority::Medium,
            completed: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_created(mut self, created: Day) -> Self {
        self.created = created;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_completed(mut self, completed: Day) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` when the task has a completion day.
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    /// Absolute distance in days between the due day and `today`.
    pub fn due_distance(&self, today: Day) -> i64 {
        (self.due - today).abs()
    }

    /// Returns `true` when the due day lies strictly before `today` and
    /// the task is not completed.
    pub fn is_overdue(&self, today: Day) -> bool {
        self.due < today && !self.is_completed()
    }
}
