//! Step-by-step cursor over a recorded operation
//!
//! [`Replay`] takes ownership of the steps one operation returned and walks
//! them forwards and backwards, the way a visualizer's step controls do.
//! Timing and rendering are left to the caller.
//!
//! ```rust
//! use minmax_trace::TracedHeap;
//! use minmax_trace::min_max::MinMaxHeap;
//! use minmax_trace::replay::Replay;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.insert(5);
//! let mut replay = Replay::new(heap.insert(1));
//!
//! assert_eq!(replay.current().map(|s| s.description.as_str()), Some("Inserted 1 at index 1"));
//! while replay.step_forward().is_some() {}
//! assert_eq!(replay.current().map(|s| &s.values), Some(&heap.snapshot()));
//! ```

use crate::trace::Step;

#[derive(Debug, Clone, Default)]
pub struct Replay {
    steps: Vec<Step>,
    position: usize,
}

impl Replay {
    /// Starts a replay positioned on the first step
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, position: 0 }
    }

    /// Step under the cursor, or `None` if there are no steps
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    /// Advances one step; `None` (and no movement) at the last step
    pub fn step_forward(&mut self) -> Option<&Step> {
        if self.position + 1 >= self.steps.len() {
            return None;
        }
        self.position += 1;
        self.steps.get(self.position)
    }

    /// Moves back one step; `None` (and no movement) at the first step
    pub fn step_back(&mut self) -> Option<&Step> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.steps.get(self.position)
    }

    /// Jumps to the final step, which shows the heap after the operation
    pub fn skip_to_end(&mut self) -> Option<&Step> {
        self.position = self.steps.len().saturating_sub(1);
        self.current()
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl From<Vec<Step>> for Replay {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::min_max::MinMaxHeap;
    use crate::TracedHeap;

    fn recorded_insert() -> (MinMaxHeap, Replay) {
        let mut heap = MinMaxHeap::new();
        for value in [10, 20, 30, 40] {
            heap.insert(value);
        }
        let replay = Replay::new(heap.insert(5));
        (heap, replay)
    }

    #[test]
    fn test_walk_forward_and_back() {
        let (_, mut replay) = recorded_insert();
        assert!(replay.len() > 2);
        assert_eq!(replay.position(), 0);
        assert!(replay.step_back().is_none());

        let first = replay.current().cloned();
        assert!(replay.step_forward().is_some());
        assert_eq!(replay.position(), 1);
        assert_eq!(replay.step_back().cloned(), first);
        assert_eq!(replay.position(), 0);
    }

    #[test]
    fn test_skip_to_end_matches_heap() {
        let (heap, mut replay) = recorded_insert();
        let last = replay.skip_to_end().map(|s| s.values.clone());
        assert_eq!(last, Some(heap.snapshot()));
        assert!(replay.is_at_end());
        assert!(replay.step_forward().is_none());

        replay.rewind();
        assert_eq!(replay.position(), 0);
        assert!(!replay.is_at_end());
    }

    #[test]
    fn test_empty_replay() {
        let mut replay = Replay::default();
        assert!(replay.is_empty());
        assert!(replay.current().is_none());
        assert!(replay.step_forward().is_none());
        assert!(replay.skip_to_end().is_none());
        assert!(replay.is_at_end());
    }
}
