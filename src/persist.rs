//! Serializable heap state
//!
//! [`HeapState`] is the record handed to whatever stores the heap between
//! sessions. Only the values survive a round trip; step history and the
//! tracing mode do not.
//!
//! # Example
//!
//! ```rust
//! use minmax_trace::TracedHeap;
//! use minmax_trace::min_max::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.insert(4);
//! heap.insert(11);
//!
//! let json = heap.to_json().unwrap();
//! let restored = MinMaxHeap::from_json(&json).unwrap();
//! assert_eq!(restored.snapshot(), heap.snapshot());
//! ```

use serde::{Deserialize, Serialize};

use crate::min_max::{check_min_max_order, MinMaxHeap};
use crate::traits::HeapError;
use crate::Value;

/// Values of a heap in level order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeapState {
    pub values: Vec<Value>,
}

impl MinMaxHeap {
    /// Captures the current values
    pub fn serialize(&self) -> HeapState {
        HeapState {
            values: self.as_slice().to_vec(),
        }
    }

    /// Rebuilds a heap from a captured state
    ///
    /// # Errors
    /// Returns `HeapError::InvariantViolation` if the values are not in
    /// min-max order, naming the first offending index.
    pub fn restore(state: HeapState) -> Result<Self, HeapError> {
        check_min_max_order(&state.values)?;
        Ok(Self::from_ordered(state.values))
    }

    pub fn to_json(&self) -> Result<String, HeapError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// # Errors
    /// Returns `HeapError::Decode` for malformed JSON and
    /// `HeapError::InvariantViolation` for well-formed but unordered values.
    pub fn from_json(json: &str) -> Result<Self, HeapError> {
        let state: HeapState = serde_json::from_str(json)?;
        Self::restore(state)
    }
}
