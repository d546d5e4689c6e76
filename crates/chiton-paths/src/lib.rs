//! Minimal-risk path search over chiton risk grids.
//!
//! [`ShortestPathEngine`] runs Dijkstra's algorithm from the top-left cell
//! to the bottom-right cell of a [`RiskGrid`](chiton_core::RiskGrid),
//! charging each cell's risk when it is entered. Two interchangeable
//! [`Selection`] strategies pick the next cell to settle:
//!
//! - **Linear scan** over the whole distance table (the simple reference)
//! - **Binary heap** with lazy deletion (the fast default)
//!
//! Both return identical costs.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | per-cell entry cost, required by the engine |

mod dijkstra;
mod distance;
mod error;
mod frontier;
mod table;
mod traits;

pub use dijkstra::{GridPath, ShortestPathEngine};
pub use distance::manhattan;
pub use error::PathError;
pub use frontier::Selection;
pub use table::UNREACHABLE;
pub use traits::{Pather, WeightedPather};

use chiton_core::RiskGrid;

/// Minimal cost across `grid` using the default [`Selection`].
pub fn minimal_cost(grid: &RiskGrid) -> Result<u32, PathError> {
    ShortestPathEngine::default().minimal_cost(grid)
}
