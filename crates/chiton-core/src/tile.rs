//! Tiled expansion of a [`RiskGrid`].
//!
//! The expanded map repeats the source grid in a square of tiles. Each tile
//! adds its Manhattan offset from the top-left tile to every risk, wrapping
//! values past 9 back to 1.

use crate::error::{GridError, InvalidGrid};
use crate::geom::{Point, Range};
use crate::grid::RiskGrid;

/// Tiles per side in the full map.
pub const TILE_FACTOR: u32 = 5;

/// Expand `source` into the full 5×5 tiled map.
///
/// # Panics
///
/// Panics if the tiled map would not fit in `i32` coordinates, which needs
/// a source side longer than `i32::MAX / 5` cells.
pub fn expand(source: &RiskGrid) -> RiskGrid {
    match expand_by(source, TILE_FACTOR) {
        Ok(grid) => grid,
        Err(e) => panic!("{e}"),
    }
}

/// Expand `source` into a `factor`×`factor` square of tiles.
///
/// Cell `(ti * w + x, tj * h + y)` of the result is the source risk at
/// `(x, y)` increased by `ti + tj` and wrapped into `1..=9`. Tiles are
/// written tile-row by tile-row, left to right.
///
/// Fails with [`InvalidGrid::ZeroTileFactor`] for a zero factor and with
/// [`InvalidGrid::TooLarge`] when the result would not fit in `i32`
/// coordinates.
pub fn expand_by(source: &RiskGrid, factor: u32) -> Result<RiskGrid, GridError> {
    if factor == 0 {
        return Err(InvalidGrid::ZeroTileFactor.into());
    }
    let (w, h) = (source.width(), source.height());
    let too_large = InvalidGrid::TooLarge {
        width: w,
        height: h,
        factor,
    };
    let f = i32::try_from(factor).map_err(|_| too_large.clone())?;
    let (Some(out_w), Some(out_h)) = (w.checked_mul(f), h.checked_mul(f)) else {
        return Err(too_large.into());
    };
    let bounds = Range::with_size(out_w, out_h);
    if (out_w as usize).checked_mul(out_h as usize).is_none() {
        return Err(too_large.into());
    }
    Ok(tile(source, bounds, f))
}

// `bounds` is the checked, non-empty extent of `f`×`f` tiles of `source`.
fn tile(source: &RiskGrid, bounds: Range, f: i32) -> RiskGrid {
    let (w, h) = (source.width(), source.height());
    let out_w = bounds.width() as usize;

    let mut cells = vec![source.cells()[0]; bounds.len()];
    for tj in 0..f {
        for ti in 0..f {
            let offset = (ti + tj) as u32;
            let origin = Point::new(ti * w, tj * h);
            for y in 0..h {
                let row_start = (origin.y + y) as usize * out_w + origin.x as usize;
                let dst = &mut cells[row_start..row_start + w as usize];
                for (d, &r) in dst.iter_mut().zip(source.row(y)) {
                    *d = r.wrapping_add(offset);
                }
            }
        }
    }

    log::debug!(
        "expanded {w}x{h} grid into {}x{} ({f}x{f} tiles)",
        bounds.width(),
        bounds.height()
    );
    RiskGrid::from_parts(bounds, cells)
}
