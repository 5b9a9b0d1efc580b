//! Min-Max Heap implementation
//!
//! A min-max heap is an implicit binary tree whose levels alternate between
//! *min levels* (a node is `<=` all of its descendants) and *max levels* (a
//! node is `>=` all of its descendants). The root sits on a min level, so the
//! smallest value is always at index 0 and the largest is at index 1 or 2.
//!
//! Every mutating operation records each comparison and swap it performs
//! into a [`StepRecorder`] and returns the resulting steps, so the operation
//! can be replayed one decision at a time.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `delete_min` | O(log n)   |
//! | `delete_max` | O(log n)   |
//! | `peek_min`   | O(1)       |
//! | `peek_max`   | O(1)       |
//!
//! Each recorded step additionally copies the heap, so a traced operation
//! costs O(n log n) overall. Use [`Tracing::Disabled`] when only the heap
//! itself is needed.
//!
//! # Example
//!
//! ```rust
//! use minmax_trace::TracedHeap;
//! use minmax_trace::min_max::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for value in [5, 1, 9, 3, 7] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Some(1));
//! assert_eq!(heap.peek_max(), Some(9));
//!
//! let steps = heap.delete_max();
//! assert_eq!(steps[0].description, "Selected max element 9 at index 2");
//! assert_eq!(heap.peek_max(), Some(7));
//! assert!(heap.is_valid());
//! ```

use log::{debug, trace};

use crate::index::{self, LevelKind};
use crate::trace::{Step, StepRecorder, Tracing};
use crate::traits::{HeapError, TracedHeap};
use crate::Value;

/// A min-max heap of signed integers with a traced mutation log
#[derive(Debug, Clone, Default)]
pub struct MinMaxHeap {
    /// Values in level order; index 0 is the root
    values: Vec<Value>,
    /// Steps of the operation in progress
    steps: StepRecorder,
}

impl TracedHeap for MinMaxHeap {
    fn new() -> Self {
        Self::with_tracing(Tracing::Enabled)
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn insert(&mut self, value: Value) -> Vec<Step> {
        self.steps.clear();

        self.values.push(value);
        let index = self.values.len() - 1;
        self.steps.record(
            &self.values,
            &[index],
            format_args!("Inserted {value} at index {index}"),
        );
        self.push_up(index);

        self.finish("insert")
    }

    fn delete_min(&mut self) -> Vec<Step> {
        self.steps.clear();

        match self.values.len() {
            0 => self.record_empty(),
            1 => {
                let min = self.values.remove(0);
                self.steps.record(
                    &self.values,
                    &[],
                    format_args!("Removed only element {min}"),
                );
            }
            len => {
                let last = len - 1;
                let min = self.values.swap_remove(0);
                self.steps.record(
                    &self.values,
                    &[0],
                    format_args!(
                        "Removed min element {min}; moved last element {} from index {last} to root (index 0)",
                        self.values[0]
                    ),
                );
                self.push_down(0);
            }
        }

        self.finish("delete_min")
    }

    fn delete_max(&mut self) -> Vec<Step> {
        self.steps.clear();

        match self.values.len() {
            0 => self.record_empty(),
            1 => {
                let max = self.values.remove(0);
                self.steps.record(
                    &self.values,
                    &[],
                    format_args!("Removed only element {max}"),
                );
            }
            len => {
                // Ties go to index 1
                let max_index = if len > 2 && self.values[2] > self.values[1] {
                    2
                } else {
                    1
                };
                let max = self.values[max_index];
                self.steps.record(
                    &self.values,
                    &[max_index],
                    format_args!("Selected max element {max} at index {max_index}"),
                );

                let last = len - 1;
                self.values.swap_remove(max_index);
                if max_index < self.values.len() {
                    self.steps.record(
                        &self.values,
                        &[max_index],
                        format_args!(
                            "Moved last element {} from index {last} to index {max_index}",
                            self.values[max_index]
                        ),
                    );
                    self.push_down(max_index);
                } else {
                    self.steps.record(
                        &self.values,
                        &[],
                        format_args!("Removed element {max} at index {max_index}"),
                    );
                }
            }
        }

        self.finish("delete_max")
    }

    fn clear(&mut self) {
        self.values.clear();
        self.steps.clear();
        debug!("clear");
    }

    fn snapshot(&self) -> Vec<Value> {
        self.values.clone()
    }
}

impl MinMaxHeap {
    /// Creates an empty heap with the given tracing mode
    pub fn with_tracing(tracing: Tracing) -> Self {
        Self {
            values: Vec::new(),
            steps: StepRecorder::new(tracing),
        }
    }

    /// Builds a heap around values already known to be in min-max order
    pub(crate) fn from_ordered(values: Vec<Value>) -> Self {
        Self {
            values,
            steps: StepRecorder::default(),
        }
    }

    pub fn tracing(&self) -> Tracing {
        self.steps.tracing()
    }

    /// Returns the smallest value without removing it
    pub fn peek_min(&self) -> Option<Value> {
        self.values.first().copied()
    }

    /// Returns the largest value without removing it
    pub fn peek_max(&self) -> Option<Value> {
        match self.values.as_slice() {
            [] => None,
            [only] => Some(*only),
            [_, rest @ ..] => rest.iter().take(2).max().copied(),
        }
    }

    /// Current values in level order, without copying
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Verifies the min-max ordering over the whole heap
    pub fn check_invariant(&self) -> Result<(), HeapError> {
        check_min_max_order(&self.values)
    }

    pub fn is_valid(&self) -> bool {
        self.check_invariant().is_ok()
    }

    fn record_empty(&mut self) {
        self.steps.record(
            &self.values,
            &[],
            format_args!("Heap is empty, nothing to delete"),
        );
    }

    fn finish(&mut self, operation: &str) -> Vec<Step> {
        debug_assert!(self.is_valid(), "{operation} broke min-max order");
        let steps = self.steps.drain();
        debug!(
            "{operation}: {} values, {} steps recorded",
            self.values.len(),
            steps.len()
        );
        steps
    }

    /// Swaps two slots and records the result
    fn swap(&mut self, a: usize, b: usize) {
        let (value_a, value_b) = (self.values[a], self.values[b]);
        self.values.swap(a, b);
        trace!("swap {value_a}@{a} <-> {value_b}@{b}");
        self.steps.record(
            &self.values,
            &[a, b],
            format_args!("Swapped {value_a} (index {a}) with {value_b} (index {b})"),
        );
    }

    fn record_no_swap(&mut self) {
        self.steps
            .record(&self.values, &[], format_args!("No swap needed"));
    }

    /// Restores order after a value was appended at `index`
    ///
    /// The value is first settled against its parent, which sits on the
    /// opposite kind of level. From then on it only needs to climb through
    /// ancestors on its own kind of level, two levels at a time.
    fn push_up(&mut self, index: usize) {
        let Some(parent) = index::parent(index) else {
            return;
        };
        let parent_kind = index::level_kind(parent);

        if self.settle_against_parent(index, parent, parent_kind) {
            self.push_up_through_grandparents(parent, parent_kind);
        } else {
            self.push_up_through_grandparents(index, parent_kind.flip());
        }
    }

    fn push_up_through_grandparents(&mut self, mut index: usize, kind: LevelKind) {
        while let Some(grandparent) = index::grandparent(index) {
            self.steps.record(
                &self.values,
                &[index, grandparent],
                format_args!(
                    "Comparing {} ({kind} level, index {index}) with grandparent {} ({kind} level, index {grandparent})",
                    self.values[index],
                    self.values[grandparent],
                    kind = kind.as_str()
                ),
            );

            if kind.outranks(&self.values[index], &self.values[grandparent]) {
                self.swap(index, grandparent);
                index = grandparent;
            } else {
                self.record_no_swap();
                break;
            }
        }
    }

    /// Restores order after an arbitrary value was dropped at `index`
    ///
    /// Each round moves the value past the extreme of its children and
    /// grandchildren. A value that lands on a grandchild slot is also settled
    /// against that slot's parent before the next round.
    fn push_down(&mut self, mut index: usize) {
        loop {
            let kind = index::level_kind(index);
            let values = &self.values;
            // Strict comparison keeps the first candidate in scan order on ties
            let extreme = index::descendants(index, values.len()).reduce(|best, candidate| {
                if kind.outranks(&values[candidate], &values[best]) {
                    candidate
                } else {
                    best
                }
            });
            let Some(extreme) = extreme else {
                break;
            };

            let is_grandchild = index::is_grandchild(index, extreme);
            self.steps.record(
                &self.values,
                &[index, extreme],
                format_args!(
                    "Comparing {} ({} level, index {index}) with {} descendant {} ({}, index {extreme})",
                    self.values[index],
                    kind.as_str(),
                    match kind {
                        LevelKind::Min => "smallest",
                        LevelKind::Max => "largest",
                    },
                    self.values[extreme],
                    if is_grandchild { "grandchild" } else { "child" },
                ),
            );

            if !kind.outranks(&self.values[extreme], &self.values[index]) {
                self.record_no_swap();
                break;
            }
            self.swap(index, extreme);

            if is_grandchild {
                if let Some(parent) = index::parent(extreme) {
                    self.settle_against_parent(extreme, parent, kind.flip());
                }
            }

            index = extreme;
        }
    }

    /// Swaps `index` with `parent` if the value outranks it on the parent's
    /// level; returns whether it did
    fn settle_against_parent(&mut self, index: usize, parent: usize, parent_kind: LevelKind) -> bool {
        self.steps.record(
            &self.values,
            &[index, parent],
            format_args!(
                "Comparing {} (index {index}) with parent {} ({} level, index {parent})",
                self.values[index],
                self.values[parent],
                parent_kind.as_str()
            ),
        );
        if parent_kind.outranks(&self.values[index], &self.values[parent]) {
            self.swap(index, parent);
            true
        } else {
            self.record_no_swap();
            false
        }
    }
}

/// Checks every node against its parent and grandparent
///
/// Together these two checks imply that each node on a min level is `<=`
/// all of its descendants and each node on a max level is `>=` them.
pub fn check_min_max_order(values: &[Value]) -> Result<(), HeapError> {
    for index in 1..values.len() {
        let ancestors = [index::parent(index), index::grandparent(index)];
        for ancestor in ancestors.into_iter().flatten() {
            if index::level_kind(ancestor).outranks(&values[index], &values[ancestor]) {
                return Err(HeapError::InvariantViolation { index, ancestor });
            }
        }
    }
    Ok(())
}
