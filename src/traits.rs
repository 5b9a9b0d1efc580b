//! Common traits and errors for traced heaps
//!
//! [`TracedHeap`] is the surface a visualizer or any other caller drives: every
//! mutating operation hands back the ordered list of [`Step`]s it performed.
//! Structural operations are total; deleting from an empty heap is reported
//! through the trace, not through an error.

use thiserror::Error;

use crate::trace::Step;
use crate::Value;

/// Error type for heap operations
#[derive(Debug, Error)]
pub enum HeapError {
    /// A restored value sequence does not satisfy the min-max ordering
    #[error("min-max order violated at index {index} (against ancestor index {ancestor})")]
    InvariantViolation { index: usize, ancestor: usize },
    /// A serialized heap record could not be decoded
    #[error("failed to decode heap state: {0}")]
    Decode(#[from] serde_json::Error),
    /// Text that does not parse as a signed integer
    #[error("invalid value {input:?}: expected a signed integer")]
    InvalidValue { input: String },
}

/// A double-ended priority structure whose mutations are traced
///
/// # Example
///
/// ```rust
/// use minmax_trace::TracedHeap;
/// use minmax_trace::min_max::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// let steps = heap.insert(9);
///
/// assert!(!steps.is_empty());
/// assert_eq!(steps.last().map(|s| &s.values), Some(&heap.snapshot()));
///
/// heap.delete_max();
/// assert_eq!(heap.len(), 2);
/// ```
pub trait TracedHeap {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value, returning the steps taken to place it
    ///
    /// # Time Complexity
    /// O(log n) comparisons; each recorded step also copies the heap.
    fn insert(&mut self, value: Value) -> Vec<Step>;

    /// Removes the smallest value, returning the steps taken
    ///
    /// On an empty heap this records a single explanatory step and leaves the
    /// heap unchanged.
    fn delete_min(&mut self) -> Vec<Step>;

    /// Removes the largest value, returning the steps taken
    ///
    /// On an empty heap this records a single explanatory step and leaves the
    /// heap unchanged.
    fn delete_max(&mut self) -> Vec<Step>;

    /// Removes every value without recording anything
    fn clear(&mut self);

    /// Copy of the current values in level order
    fn snapshot(&self) -> Vec<Value>;
}
