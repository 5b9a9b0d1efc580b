//! Traced Min-Max Heap for Rust
//!
//! This crate provides a min-max heap (a double-ended priority queue with
//! O(log n) insert, delete-min and delete-max) that records every comparison
//! and swap it performs as an ordered, replayable list of steps.
//!
//! # Features
//!
//! - **Min-Max Heap**: smallest value at the root, largest at one of its children
//! - **Step trace**: each mutation returns snapshots, highlighted indices and a description per step
//! - **Replay**: a cursor for walking a trace forwards and backwards
//! - **Persistence**: `serde` round trip of the heap values with order checking on restore
//!
//! # Example
//!
//! ```rust
//! use minmax_trace::min_max::MinMaxHeap;
//! use minmax_trace::TracedHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.insert(5);
//! heap.insert(1);
//! let steps = heap.insert(9);
//!
//! for step in &steps {
//!     println!("{}", step.description);
//! }
//! assert_eq!(heap.peek_min(), Some(1));
//! assert_eq!(heap.peek_max(), Some(9));
//! ```

pub mod index;
pub mod input;
pub mod min_max;
pub mod persist;
pub mod replay;
pub mod stdlib_compat;
pub mod trace;
pub mod traits;

/// Values stored in the heap
pub type Value = i64;

// Re-export the main types for convenience
pub use min_max::MinMaxHeap;
pub use persist::HeapState;
pub use trace::{Step, StepRecorder, Tracing};
pub use traits::{HeapError, TracedHeap};
