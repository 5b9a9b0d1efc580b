//! Index arithmetic for an implicit, zero-based binary tree
//!
//! A min-max heap is stored level by level in a flat vector. The root lives at
//! index 0, its children at 1 and 2, and so on. Levels alternate meaning:
//! level 0 (the root) is a min level, level 1 is a max level, level 2 is a
//! min level again.
//!
//! | Function        | Result for index `i`          |
//! |-----------------|-------------------------------|
//! | [`level`]       | `floor(log2(i + 1))`          |
//! | [`parent`]      | `(i - 1) / 2`, `None` at root |
//! | [`left_child`]  | `2i + 1`                      |
//! | [`right_child`] | `2i + 2`                      |
//! | [`grandparent`] | `parent(parent(i))`           |
//!
//! `parent` and `grandparent` return `Option` so that callers cannot walk
//! past the root by accident.

/// Whether a level orders its subtree from the smallest or the largest value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// Node is `<=` every descendant
    Min,
    /// Node is `>=` every descendant
    Max,
}

impl LevelKind {
    /// Returns the kind of the level directly below (or above) this one
    pub fn flip(self) -> Self {
        match self {
            LevelKind::Min => LevelKind::Max,
            LevelKind::Max => LevelKind::Min,
        }
    }

    /// Returns true if `a` belongs strictly closer to the top of a level of
    /// this kind than `b` does
    ///
    /// On a min level that means `a < b`; on a max level, `a > b`.
    #[inline]
    pub fn outranks<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            LevelKind::Min => a < b,
            LevelKind::Max => a > b,
        }
    }

    /// Human readable name used in trace descriptions
    pub fn as_str(self) -> &'static str {
        match self {
            LevelKind::Min => "min",
            LevelKind::Max => "max",
        }
    }
}

/// Depth of `index`, with the root at level 0
#[inline]
pub fn level(index: usize) -> u32 {
    // index + 1 is never zero, so ilog2 is total here
    (index + 1).ilog2()
}

/// Returns true if `index` sits on a min level
#[inline]
pub fn is_min_level(index: usize) -> bool {
    level(index) % 2 == 0
}

/// Kind of the level `index` sits on
#[inline]
pub fn level_kind(index: usize) -> LevelKind {
    if is_min_level(index) {
        LevelKind::Min
    } else {
        LevelKind::Max
    }
}

/// Parent of `index`, or `None` for the root
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Grandparent of `index`, or `None` for the root and its children
#[inline]
pub fn grandparent(index: usize) -> Option<usize> {
    parent(index).and_then(parent)
}

#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Children and grandchildren of `index` that exist in a heap of `len`
/// elements, in scan order
///
/// The order is left child, right child, then the grandchildren from left to
/// right. Because the tree is complete, the first out-of-range index ends the
/// scan.
pub fn descendants(index: usize, len: usize) -> impl Iterator<Item = usize> {
    let left = left_child(index);
    let right = right_child(index);
    [
        left,
        right,
        left_child(left),
        right_child(left),
        left_child(right),
        right_child(right),
    ]
    .into_iter()
    .filter(move |&i| i < len)
}

/// Returns true if `descendant` is a grandchild of `ancestor`
#[inline]
pub fn is_grandchild(ancestor: usize, descendant: usize) -> bool {
    grandparent(descendant) == Some(ancestor)
}
