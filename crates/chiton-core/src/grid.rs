//! The [`RiskGrid`] type, an immutable 2D grid of [`Risk`] values.
//!
//! Unlike a drawing grid, a `RiskGrid` owns its cells outright and has no
//! mutation API: it is validated once at construction and only read after
//! that. New grids (such as the tiled expansion) are built as new values.

use std::fmt;

use rand::{Rng, RngExt};

use crate::error::{GridError, InvalidGrid};
use crate::geom::{Point, Range};
use crate::risk::Risk;

/// A rectangular grid of risk levels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "repr::GridRepr", into = "repr::GridRepr")
)]
pub struct RiskGrid {
    cells: Vec<Risk>,
    bounds: Range,
}

impl RiskGrid {
    /// Build a grid from row-major `cells`.
    ///
    /// Fails if either dimension is not positive or if `cells` does not hold
    /// exactly `width * height` values.
    pub fn new(width: i32, height: i32, cells: Vec<Risk>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(InvalidGrid::Empty.into());
        }
        let bounds = Range::with_size(width, height);
        if cells.len() != bounds.len() {
            return Err(InvalidGrid::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            }
            .into());
        }
        Ok(Self { cells, bounds })
    }

    /// Build a grid from rows of raw risk values.
    ///
    /// Every row must be non-empty and as wide as the first one, and every
    /// value must be in `1..=9`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(InvalidGrid::Empty.into());
        };
        let width = first.as_ref().len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(InvalidGrid::EmptyRow { row: y }.into());
            }
            if row.len() != width {
                return Err(InvalidGrid::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: row.len(),
                }
                .into());
            }
            for (x, &value) in row.iter().enumerate() {
                let risk = Risk::new(value).ok_or(InvalidGrid::RiskOutOfRange {
                    pos: Point::new(x as i32, y as i32),
                    value: value as u32,
                })?;
                cells.push(risk);
            }
        }
        Self::new(width as i32, rows.len() as i32, cells)
    }

    /// Assemble a grid whose shape the caller has already checked.
    pub(crate) fn from_parts(bounds: Range, cells: Vec<Risk>) -> Self {
        debug_assert!(!bounds.is_empty() && bounds.len() == cells.len());
        Self { cells, bounds }
    }

    /// Build a grid by evaluating `f` at every cell, row by row.
    ///
    /// The closure always yields a valid [`Risk`], so only the dimensions
    /// can be rejected.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> Risk,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(InvalidGrid::Empty.into());
        }
        let bounds = Range::with_size(width, height);
        let cells = bounds.iter().map(&mut f).collect();
        Ok(Self { cells, bounds })
    }

    /// A grid with uniformly random risks in `1..=9`.
    pub fn random<R: Rng>(width: i32, height: i32, rng: &mut R) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| Risk::wrap(rng.random_range(1..=9)))
    }

    /// The grid extent, `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The top-left cell, where every search starts.
    #[inline]
    pub fn source(&self) -> Point {
        self.bounds.min
    }

    /// The bottom-right cell, where every search ends.
    #[inline]
    pub fn destination(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }

    /// The risk at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Risk> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// The entry cost of `p`.
    pub fn cost(&self, p: Point) -> Result<u32, GridError> {
        self.get(p)
            .map(Risk::cost)
            .ok_or(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            })
    }

    /// One row of the grid. Panics if `y` is out of range.
    pub fn row(&self, y: i32) -> &[Risk] {
        let w = self.width() as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Row-major iterator over `(Point, Risk)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Risk)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Risk] {
        &self.cells
    }
}

impl fmt::Display for RiskGrid {
    /// Digit rows joined by `'\n'`, the same layout [`parse_grid`](crate::parse_grid) reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for r in self.row(y) {
                write!(f, "{r}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::*;

    /// Wire form of a grid: dimensions plus row-major digits.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct GridRepr {
        width: i32,
        height: i32,
        cells: Vec<Risk>,
    }

    impl From<RiskGrid> for GridRepr {
        fn from(g: RiskGrid) -> Self {
            Self {
                width: g.width(),
                height: g.height(),
                cells: g.cells,
            }
        }
    }

    impl TryFrom<GridRepr> for RiskGrid {
        type Error = GridError;

        fn try_from(r: GridRepr) -> Result<Self, GridError> {
            RiskGrid::new(r.width, r.height, r.cells)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = RiskGrid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: RiskGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn invalid_payloads_are_rejected() {
        let bad_value = r#"{"width":1,"height":1,"cells":[0]}"#;
        assert!(serde_json::from_str::<RiskGrid>(bad_value).is_err());
        let bad_count = r#"{"width":2,"height":1,"cells":[1]}"#;
        assert!(serde_json::from_str::<RiskGrid>(bad_count).is_err());
    }
}
