//! Errors raised while building or reading a [`RiskGrid`](crate::RiskGrid).

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors returned by grid construction and grid accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell was read outside the grid extent. Always a caller bug.
    #[error("cell {pos} is outside the grid {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    /// The grid could not be built.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] InvalidGrid),
}

/// Why a grid was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGrid {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },
    #[error("risk {value} at {pos} is outside 1..=9")]
    RiskOutOfRange { pos: Point, value: u32 },
    #[error("character {ch:?} at {pos} is not a digit in 1..=9")]
    InvalidDigit { pos: Point, ch: char },
    #[error("tile factor must be at least 1")]
    ZeroTileFactor,
    #[error("{factor}x{factor} tiles of a {width}x{height} grid do not fit in i32 coordinates")]
    TooLarge { width: i32, height: i32, factor: u32 },
}
