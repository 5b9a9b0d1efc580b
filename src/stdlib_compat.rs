//! Standard library collection traits for [`MinMaxHeap`]
//!
//! Lets a heap be built with `collect()` or grown with `extend()`. Values go
//! in one `insert` at a time and the steps of those inserts are discarded.
//!
//! # Example
//!
//! ```rust
//! use minmax_trace::min_max::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap = [5, 3, 7].into_iter().collect();
//! heap.extend([1, 9]);
//!
//! assert_eq!(heap.peek_min(), Some(1));
//! assert_eq!(heap.peek_max(), Some(9));
//! ```

use crate::min_max::MinMaxHeap;
use crate::traits::TracedHeap;
use crate::Value;

impl Extend<Value> for MinMaxHeap {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a Value> for MinMaxHeap {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<Value> for MinMaxHeap {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut heap = <MinMaxHeap as TracedHeap>::new();
        heap.extend(iter);
        heap
    }
}

impl From<MinMaxHeap> for Vec<Value> {
    fn from(heap: MinMaxHeap) -> Self {
        heap.snapshot()
    }
}
