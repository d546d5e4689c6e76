use chiton_core::{Point, Range};
use thiserror::Error;

/// Errors returned by [`ShortestPathEngine`](crate::ShortestPathEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No path connects the endpoints. On a risk grid this only happens
    /// for a zero-area range.
    #[error("no path from {from} to {to}")]
    Unreachable { from: Point, to: Point },
    /// A search endpoint lies outside the searched range.
    #[error("endpoint {pos} is outside the search range {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    /// More cells were settled than the range holds.
    #[error("search settled more than {budget} cells")]
    BudgetExhausted { budget: usize },
}
