//! **chiton-core**: the risk grid model shared by the chiton crates.
//!
//! This crate provides the cell geometry ([`Point`], [`Range`]), the
//! validated and immutable [`RiskGrid`], its text parser ([`parse_grid`]),
//! and the 5×5 tiled expansion ([`expand`]).

pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;
pub mod risk;
pub mod tile;

pub use error::{GridError, InvalidGrid};
pub use geom::{Point, Range, RangeIter};
pub use grid::RiskGrid;
pub use parse::parse_grid;
pub use risk::{Risk, RiskRangeError};
pub use tile::{TILE_FACTOR, expand, expand_by};
