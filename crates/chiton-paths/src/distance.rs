use chiton_core::Point;

/// Manhattan (L1) distance between two points.
///
/// With every risk at 1, this is exactly the minimal cost between them.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
