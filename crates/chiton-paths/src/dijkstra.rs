use chiton_core::{Point, Range, RiskGrid};

use crate::error::PathError;
use crate::frontier::{Frontier, HeapFrontier, LinearScan, Selection};
use crate::table::DistanceTable;
use crate::traits::WeightedPather;

/// A minimal-risk route, as returned by
/// [`ShortestPathEngine::shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    /// Total entry cost of every cell after the first.
    pub cost: u32,
    /// Cells from origin to goal, both included.
    pub cells: Vec<Point>,
}

/// Single-source, single-target Dijkstra search over a grid.
///
/// The engine only carries its [`Selection`] strategy. Every call builds a
/// fresh distance table, so one engine can serve any number of searches,
/// including from several threads at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestPathEngine {
    selection: Selection,
}

/// Result of one search: the goal cost plus the table it was read from.
struct Settled {
    cost: u32,
    goal: usize,
    table: DistanceTable,
}

impl ShortestPathEngine {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Minimal total risk of moving from the top-left to the bottom-right
    /// cell of `grid`.
    ///
    /// The origin's own risk is never charged, so a 1×1 grid costs 0.
    pub fn minimal_cost(&self, grid: &RiskGrid) -> Result<u32, PathError> {
        self.cost_between(grid, grid.bounds(), grid.source(), grid.destination())
    }

    /// Like [`minimal_cost`](Self::minimal_cost), but also returns the route.
    pub fn shortest_path(&self, grid: &RiskGrid) -> Result<GridPath, PathError> {
        self.path_between(grid, grid.bounds(), grid.source(), grid.destination())
    }

    /// Minimal cost from `from` to `to` over the cells of `bounds`.
    pub fn cost_between<P: WeightedPather>(
        &self,
        pather: &P,
        bounds: Range,
        from: Point,
        to: Point,
    ) -> Result<u32, PathError> {
        self.search(pather, bounds, from, to).map(|s| s.cost)
    }

    /// Minimal-cost route from `from` to `to` over the cells of `bounds`.
    pub fn path_between<P: WeightedPather>(
        &self,
        pather: &P,
        bounds: Range,
        from: Point,
        to: Point,
    ) -> Result<GridPath, PathError> {
        let s = self.search(pather, bounds, from, to)?;
        Ok(GridPath {
            cost: s.cost,
            cells: s.table.trace_back(s.goal),
        })
    }

    fn search<P: WeightedPather>(
        &self,
        pather: &P,
        bounds: Range,
        from: Point,
        to: Point,
    ) -> Result<Settled, PathError> {
        if bounds.is_empty() {
            return Err(PathError::Unreachable { from, to });
        }
        for pos in [from, to] {
            if !bounds.contains(pos) {
                return Err(PathError::OutOfBounds { pos, bounds });
            }
        }
        match self.selection {
            Selection::LinearScan => run(pather, bounds, from, to, LinearScan),
            Selection::BinaryHeap => run(pather, bounds, from, to, HeapFrontier::default()),
        }
    }
}

fn run<P: WeightedPather, F: Frontier>(
    pather: &P,
    bounds: Range,
    from: Point,
    to: Point,
    mut frontier: F,
) -> Result<Settled, PathError> {
    let mut table = DistanceTable::new(bounds);
    let (Some(start), Some(goal)) = (table.idx(from), table.idx(to)) else {
        return Err(PathError::Unreachable { from, to });
    };
    table.seed(start);
    frontier.push(start, 0);

    // Every cell is settled at most once, so a correct frontier never yields
    // more than `budget` times. Going past it means the frontier is looping.
    let budget = table.len();
    let mut pops = 0usize;
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    let done = |table: DistanceTable, pops: usize| -> Result<Settled, PathError> {
        log::trace!("settled {pops} of {budget} cells reaching {to}");
        Ok(Settled {
            cost: table.distance(goal),
            goal,
            table,
        })
    };

    loop {
        let Some(ci) = frontier.pop_min(&table) else {
            return Err(PathError::Unreachable { from, to });
        };
        pops += 1;
        if pops > budget {
            log::warn!("frontier yielded more than {budget} cells searching {from} -> {to}");
            return Err(PathError::BudgetExhausted { budget });
        }
        if table.is_settled(ci) {
            continue;
        }
        table.settle(ci);
        if ci == goal {
            return done(table, pops);
        }

        let current = table.distance(ci);
        nbuf.clear();
        pather.neighbors(table.point(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = table.idx(np) else {
                continue;
            };
            let candidate = current.saturating_add(pather.cost(np));
            if table.relax(ni, candidate, ci) {
                frontier.push(ni, candidate);
            }
            // Entry costs are positive and depend only on the entered cell,
            // so the first relaxation of the goal is already final.
            if ni == goal {
                return done(table, pops);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::traits::Pather;
    use chiton_core::{expand, parse_grid};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    const SAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    const BOTH: [Selection; 2] = [Selection::LinearScan, Selection::BinaryHeap];

    fn engines() -> impl Iterator<Item = ShortestPathEngine> {
        BOTH.into_iter().map(ShortestPathEngine::new)
    }

    /// Independent reference using the `pathfinding` crate.
    fn reference_cost(grid: &RiskGrid) -> u32 {
        let goal = grid.destination();
        let (_, cost) = pathfinding::prelude::dijkstra(
            &grid.source(),
            |&p| {
                let mut buf = Vec::new();
                grid.neighbors(p, &mut buf);
                buf.into_iter().map(|n| (n, grid.cost(n).unwrap()))
            },
            |&p| p == goal,
        )
        .unwrap();
        cost
    }

    #[test]
    fn sample_grid_costs_40() {
        let g = parse_grid(SAMPLE).unwrap();
        for e in engines() {
            assert_eq!(e.minimal_cost(&g), Ok(40), "{}", e.selection());
        }
        assert_eq!(reference_cost(&g), 40);
    }

    #[test]
    fn expanded_sample_costs_315() {
        let g = expand(&parse_grid(SAMPLE).unwrap());
        assert_eq!(g.size(), Point::new(50, 50));
        for e in engines() {
            assert_eq!(e.minimal_cost(&g), Ok(315), "{}", e.selection());
        }
    }

    #[test]
    fn single_cell_costs_nothing() {
        for v in 1..=9u8 {
            let g = RiskGrid::from_rows(&[[v]]).unwrap();
            for e in engines() {
                assert_eq!(e.minimal_cost(&g), Ok(0));
                let path = e.shortest_path(&g).unwrap();
                assert_eq!(path.cells, vec![Point::ZERO]);
            }
        }
    }

    #[test]
    fn uniform_grid_costs_manhattan_distance() {
        let mut last = 0;
        for side in 1..=12 {
            let g = RiskGrid::from_rows(&vec![vec![1u8; side]; side]).unwrap();
            let want = manhattan(g.source(), g.destination()) as u32;
            for e in engines() {
                assert_eq!(e.minimal_cost(&g), Ok(want));
            }
            assert!(want >= last);
            last = want;
        }
    }

    #[test]
    fn single_row_and_column() {
        let row = parse_grid("19191").unwrap();
        let col = parse_grid("1\n9\n1\n9\n1").unwrap();
        for e in engines() {
            assert_eq!(e.minimal_cost(&row), Ok(20));
            assert_eq!(e.minimal_cost(&col), Ok(20));
        }
    }

    #[test]
    fn strategies_agree_on_random_corpus() {
        let mut rng = StdRng::seed_from_u64(2021);
        let mut sizes: Vec<(i32, i32)> = (0..20)
            .map(|_| (rng.random_range(1..=100), rng.random_range(1..=100)))
            .collect();
        sizes.push((100, 100));
        let [linear, heap] = BOTH.map(ShortestPathEngine::new);
        for (w, h) in sizes {
            let g = RiskGrid::random(w, h, &mut rng).unwrap();
            let a = linear.minimal_cost(&g).unwrap();
            let b = heap.minimal_cost(&g).unwrap();
            assert_eq!(a, b, "strategies disagree on {w}x{h} grid");
            assert_eq!(a, reference_cost(&g), "reference disagrees on {w}x{h} grid");
        }
    }

    #[test]
    fn shortest_path_is_a_connected_route() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let w = rng.random_range(1..=30);
            let h = rng.random_range(1..=30);
            let g = RiskGrid::random(w, h, &mut rng).unwrap();
            for e in engines() {
                let path = e.shortest_path(&g).unwrap();
                assert_eq!(path.cells.first(), Some(&g.source()));
                assert_eq!(path.cells.last(), Some(&g.destination()));
                for pair in path.cells.windows(2) {
                    assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
                }
                let total: u32 = path.cells[1..].iter().map(|&p| g.cost(p).unwrap()).sum();
                assert_eq!(total, path.cost);
                assert_eq!(Ok(path.cost), e.minimal_cost(&g));
            }
        }
    }

    #[test]
    fn endpoints_outside_bounds() {
        let g = parse_grid("12\n34").unwrap();
        let e = ShortestPathEngine::default();
        let outside = Point::new(2, 0);
        assert_eq!(
            e.cost_between(&g, g.bounds(), Point::ZERO, outside),
            Err(PathError::OutOfBounds {
                pos: outside,
                bounds: g.bounds()
            })
        );
    }

    #[test]
    fn empty_range_is_unreachable() {
        let g = parse_grid("1").unwrap();
        let e = ShortestPathEngine::default();
        assert_eq!(
            e.cost_between(&g, Range::with_size(0, 0), Point::ZERO, Point::ZERO),
            Err(PathError::Unreachable {
                from: Point::ZERO,
                to: Point::ZERO
            })
        );
    }

    /// A grid with a solid wall down column 1.
    struct Walled(RiskGrid);

    impl Pather for Walled {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            self.0.neighbors(p, buf);
            buf.retain(|n| n.x != 1);
        }
    }

    impl WeightedPather for Walled {
        fn cost(&self, to: Point) -> u32 {
            self.0.cost(to).unwrap_or(u32::MAX)
        }
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let grid = parse_grid("111\n111").unwrap();
        let (from, to) = (grid.source(), grid.destination());
        let walled = Walled(grid);
        for e in engines() {
            assert_eq!(
                e.cost_between(&walled, walled.0.bounds(), from, to),
                Err(PathError::Unreachable { from, to })
            );
        }
    }

    /// Keeps handing back the first cell it was given.
    struct Stuck(Option<usize>);

    impl Frontier for Stuck {
        fn push(&mut self, idx: usize, _dist: u32) {
            self.0.get_or_insert(idx);
        }

        fn pop_min(&mut self, _table: &DistanceTable) -> Option<usize> {
            self.0
        }
    }

    #[test]
    fn looping_frontier_exhausts_budget() {
        let g = parse_grid("11\n11").unwrap();
        let (from, to) = (g.source(), g.destination());
        assert_eq!(
            run(&g, g.bounds(), from, to, Stuck(None)).err(),
            Some(PathError::BudgetExhausted { budget: 4 })
        );
    }

    #[test]
    fn sub_range_search() {
        let g = parse_grid(SAMPLE).unwrap();
        let inner = Range::new(1, 1, 4, 3);
        for e in engines() {
            // Rows 381 / 136: down, then right along 3 and 6.
            let cost = e
                .cost_between(&g, inner, Point::new(1, 1), Point::new(3, 2))
                .unwrap();
            assert_eq!(cost, 10);
        }
    }
}
