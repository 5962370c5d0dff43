//! Generic array-backed binary heap parameterized by an ordering policy.
//!
//! The heap itself knows nothing about what it stores or why one element
//! outranks another; both are supplied by the caller:
//!
//! - **Element type** `T`: any owned value. No intrinsic comparability is
//!   required — an `Ord` bound on `T`, where present, belongs to a policy
//!   implementation, never to the container.
//! - **[`OrderingPolicy`]**: a pure two-element comparison bound at heap
//!   construction. [`MaxPolicy`] and [`MinPolicy`] cover the common cases
//!   for `Ord` types; [`FnPolicy`] adapts a closure.
//!
//! # Tie handling
//!
//! Extraction order among elements the policy considers equal in rank is
//! unspecified. The built-in policies treat ties as "either may sit on
//! top"; callers needing FIFO or insertion-order stability must encode a
//! disambiguating component into their policy.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Every operation runs to completion in
//! O(log n) swaps with no internal locking; sharing one heap across
//! threads requires external mutual exclusion around each call.

mod engine;
mod policy;
mod types;

pub use engine::PriorityHeap;
pub use policy::{FnPolicy, MaxPolicy, MinPolicy};
pub use types::{EmptyHeap, OrderingPolicy};
