//! Step recording for heap operations
//!
//! Every mutating heap operation produces an ordered list of [`Step`]s: one
//! per comparison, swap or move it performs. A step carries a full copy of
//! the heap contents at that instant, so the list can be played back in
//! order after the heap has moved on.
//!
//! The [`StepRecorder`] is an append-only log. It is cleared at the start of
//! an operation, appended to while the operation runs, and drained when the
//! operation returns. Steps are never edited after they are recorded.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Value;

/// Indices highlighted by a step (at most two in practice)
pub type Highlight = SmallVec<[usize; 2]>;

/// One recorded decision point inside a heap operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Heap contents at the moment the step was recorded
    pub values: Vec<Value>,
    /// Indices being compared, swapped or moved; `None` for narrative steps
    pub highlight: Option<Highlight>,
    /// What happened, in words
    pub description: String,
}

impl Step {
    /// Returns true if `index` is highlighted in this step
    pub fn highlights(&self, index: usize) -> bool {
        self.highlight
            .as_ref()
            .is_some_and(|indices| indices.contains(&index))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.description, self.values)
    }
}

/// Whether operations record steps at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tracing {
    /// Record every step (the default)
    #[default]
    Enabled,
    /// Skip snapshots and descriptions; operations return no steps
    Disabled,
}

/// Append-only log of steps for the operation in progress
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    tracing: Tracing,
}

impl StepRecorder {
    pub fn new(tracing: Tracing) -> Self {
        Self {
            steps: Vec::new(),
            tracing,
        }
    }

    pub fn tracing(&self) -> Tracing {
        self.tracing
    }

    /// Discards any steps left over from a previous operation
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Appends a step
    ///
    /// `values` is copied, so later mutation of the heap does not show up in
    /// this step. The description is only formatted when tracing is enabled.
    pub fn record(&mut self, values: &[Value], highlight: &[usize], description: fmt::Arguments<'_>) {
        if self.tracing == Tracing::Disabled {
            return;
        }
        let highlight = if highlight.is_empty() {
            None
        } else {
            Some(Highlight::from_slice(highlight))
        };
        self.steps.push(Step {
            values: values.to_vec(),
            highlight,
            description: description.to_string(),
        });
    }

    /// Number of steps recorded since the last clear
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hands the accumulated steps to the caller, leaving the log empty
    pub fn drain(&mut self) -> Vec<Step> {
        std::mem::take(&mut self.steps)
    }
}
