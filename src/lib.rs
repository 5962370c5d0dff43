//! Policy-parameterized binary heap for priority-driven item selection.
//!
//! Provides a generic array-backed binary heap together with a small set
//! of ranking policies:
//!
//! - **PriorityHeap**: array-backed binary heap generic over the element
//!   type and an injected ordering policy. Exposes insert, peek,
//!   extract-top, and bulk loading — the engine behind "pick the next
//!   item to act on".
//! - **Built-in policies**: max-order, min-order, and a closure adapter
//!   for ad-hoc orderings.
//! - **Task domain**: a work-item model (title, dates, declared priority)
//!   plus a composite policy ranking by closeness of due date with ties
//!   broken by declared priority, and a selection queue built on the heap.
//! - **Paging**: a small helper for splitting a sequence into fixed-size
//!   pages when presenting ranked results.
//!
//! # Architecture
//!
//! The heap layer contains no domain-specific concepts — due dates,
//! declared priorities, and task records live in the `task` module and
//! reach the heap only through an [`heap::OrderingPolicy`] implementation.
//! Consumers with other domains plug in their own policies the same way.

pub mod heap;
pub mod paging;
pub mod task;
