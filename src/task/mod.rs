//! Work-item model and the due-date ranking built on the heap.
//!
//! A [`TaskItem`] carries a title, a description, creation and due days,
//! a declared [`Priority`], and an optional completion day. Days are
//! plain [`Day`] numbers relative to an arbitrary epoch; the ranking only
//! ever consumes day differences, so no calendar arithmetic is needed.
//!
//! [`DueDistanceThenPriority`] is the composite ordering policy: the task
//! whose due day lies closest to the reference day ranks first, and an
//! exact distance tie falls to the higher declared priority. When both
//! tie, order is unspecified, like every other tie in the heap layer.
//!
//! [`TaskQueue`] wraps a `PriorityHeap` bound to that policy and answers
//! "which task next" via peek/extract.

mod policy;
mod queue;
pub mod report;
mod types;

pub use policy::DueDistanceThenPriority;
pub use queue::TaskQueue;
pub use types::{Day, Priority, TaskItem};
