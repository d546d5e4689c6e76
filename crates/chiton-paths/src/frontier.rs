//! Strategies for picking the next cell to settle.

use std::collections::BinaryHeap;
use std::fmt;

use crate::table::{DistanceTable, UNREACHABLE};

/// How the search finds the unsettled cell with the smallest distance.
///
/// Both strategies settle cells in an order that yields the same minimal
/// cost; they differ only in running time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Scan the whole distance table on every step. O(V²) overall.
    LinearScan,
    /// Keep candidates in a binary min-heap. O(E log V) overall.
    #[default]
    BinaryHeap,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Selection::LinearScan => "linear-scan",
            Selection::BinaryHeap => "binary-heap",
        })
    }
}

/// Source of the next cell to settle.
pub(crate) trait Frontier {
    /// Note that `idx` now has tentative distance `dist`.
    fn push(&mut self, idx: usize, dist: u32);

    /// Return the unsettled cell with the smallest finite distance, or
    /// `None` if every reachable cell is settled.
    fn pop_min(&mut self, table: &DistanceTable) -> Option<usize>;
}

// ---------------------------------------------------------------------------
// Linear scan
// ---------------------------------------------------------------------------

/// Reads candidates straight from the table, so it keeps no state.
#[derive(Default)]
pub(crate) struct LinearScan;

impl Frontier for LinearScan {
    fn push(&mut self, _idx: usize, _dist: u32) {}

    fn pop_min(&mut self, table: &DistanceTable) -> Option<usize> {
        let mut best = UNREACHABLE;
        let mut found = None;
        for i in 0..table.len() {
            if table.is_settled(i) {
                continue;
            }
            let d = table.distance(i);
            if d < best {
                best = d;
                found = Some(i);
            }
        }
        found
    }
}

// ---------------------------------------------------------------------------
// Binary heap
// ---------------------------------------------------------------------------

/// Heap entry, ordered so `BinaryHeap` (a max-heap) pops the smallest
/// distance first. Ties go to the lower index.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Heap frontier with lazy deletion: a cell may be pushed several times as
/// its distance drops, and outdated entries are skipped when popped.
#[derive(Default)]
pub(crate) struct HeapFrontier {
    open: BinaryHeap<NodeRef>,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, idx: usize, dist: u32) {
        self.open.push(NodeRef { idx, dist });
    }

    fn pop_min(&mut self, table: &DistanceTable) -> Option<usize> {
        while let Some(node) = self.open.pop() {
            // Skip stale entries.
            if table.is_settled(node.idx) || node.dist != table.distance(node.idx) {
                continue;
            }
            return Some(node.idx);
        }
        None
    }
}
