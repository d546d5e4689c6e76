use chiton_core::{Point, RiskGrid};

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose moves are charged by the cell being entered.
///
/// The cost of a step depends only on its destination, never on where the
/// step came from. The search relies on this to stop as soon as the goal's
/// distance is first relaxed.
pub trait WeightedPather: Pather {
    /// Cost of stepping onto `to`. Must be > 0.
    fn cost(&self, to: Point) -> u32;
}

impl Pather for RiskGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }
}

impl WeightedPather for RiskGrid {
    /// The cell's risk. Cells outside the grid cost `u32::MAX`, though
    /// [`neighbors`](Pather::neighbors) never yields them.
    fn cost(&self, to: Point) -> u32 {
        self.get(to).map_or(u32::MAX, |r| r.cost())
    }
}
