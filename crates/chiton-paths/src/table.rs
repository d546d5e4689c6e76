use chiton_core::{Point, Range};

/// Sentinel value meaning "not reached yet" in a [`DistanceTable`].
pub const UNREACHABLE: u32 = u32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// DistanceTable
// ---------------------------------------------------------------------------

/// Per-search bookkeeping: tentative distances, settled flags and
/// predecessors, stored flat in row-major order over a [`Range`].
///
/// A table lives for exactly one search. Distances only ever go down, and
/// once a cell is settled it is never written again.
pub(crate) struct DistanceTable {
    rng: Range,
    dist: Vec<u32>,
    settled: Vec<bool>,
    parent: Vec<usize>,
}

impl DistanceTable {
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            dist: vec![UNREACHABLE; len],
            settled: vec![false; len],
            parent: vec![NO_PARENT; len],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.dist.len()
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }

    #[inline]
    pub(crate) fn distance(&self, idx: usize) -> u32 {
        self.dist[idx]
    }

    #[inline]
    pub(crate) fn is_settled(&self, idx: usize) -> bool {
        self.settled[idx]
    }

    /// Seed the search origin at distance 0.
    pub(crate) fn seed(&mut self, idx: usize) {
        self.dist[idx] = 0;
    }

    /// Lower the distance of `idx` to `dist`, reached from `from`.
    ///
    /// Returns `false` (and changes nothing) unless `dist` is a strict
    /// improvement on an unsettled cell.
    pub(crate) fn relax(&mut self, idx: usize, dist: u32, from: usize) -> bool {
        if self.settled[idx] || dist >= self.dist[idx] {
            return false;
        }
        self.dist[idx] = dist;
        self.parent[idx] = from;
        true
    }

    pub(crate) fn settle(&mut self, idx: usize) {
        debug_assert!(!self.settled[idx], "cell {idx} settled twice");
        self.settled[idx] = true;
    }

    /// Walk predecessors back from `idx` to the origin. The result starts
    /// at the origin and ends at `idx`.
    pub(crate) fn trace_back(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}
