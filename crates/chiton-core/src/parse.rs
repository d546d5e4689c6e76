//! Reading a [`RiskGrid`] from its text form.

use std::str::FromStr;

use crate::error::{GridError, InvalidGrid};
use crate::geom::Point;
use crate::grid::RiskGrid;
use crate::risk::Risk;

/// Parse newline-separated rows of digits into a grid.
///
/// Leading/trailing whitespace is trimmed from the whole input (so a
/// trailing newline is fine) but not from individual lines. `\r\n` line
/// endings are accepted. Every character must be a digit in `1..=9` and
/// every line must have the same width.
pub fn parse_grid(text: &str) -> Result<RiskGrid, GridError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InvalidGrid::Empty.into());
    }

    let mut cells = Vec::with_capacity(text.len());
    let mut width: Option<usize> = None;
    let mut height = 0usize;

    for (y, line) in text.lines().enumerate() {
        let mut x = 0usize;
        for ch in line.chars() {
            let risk = Risk::from_digit(ch).ok_or(InvalidGrid::InvalidDigit {
                pos: Point::new(x as i32, y as i32),
                ch,
            })?;
            cells.push(risk);
            x += 1;
        }
        if x == 0 {
            return Err(InvalidGrid::EmptyRow { row: y }.into());
        }
        match width {
            None => width = Some(x),
            Some(w) if w != x => {
                return Err(InvalidGrid::InconsistentWidth {
                    row: y,
                    expected: w,
                    found: x,
                }
                .into());
            }
            Some(_) => {}
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    log::trace!("parsed {width}x{height} risk grid");
    RiskGrid::new(width as i32, height as i32, cells)
}

impl FromStr for RiskGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn parse_sample() {
        let g = parse_grid(SAMPLE).unwrap();
        assert_eq!(g.size(), Point::new(10, 10));
        assert_eq!(g.cost(Point::new(0, 0)), Ok(1));
        assert_eq!(g.cost(Point::new(9, 9)), Ok(1));
        assert_eq!(g.cost(Point::new(3, 0)), Ok(3));
        assert_eq!(g.cost(Point::new(0, 4)), Ok(7));
    }

    #[test]
    fn trailing_newline_and_crlf() {
        let g = parse_grid("12\r\n34\r\n").unwrap();
        assert_eq!(g.to_string(), "12\n34");
    }

    #[test]
    fn display_round_trips() {
        let g: RiskGrid = SAMPLE.parse().unwrap();
        assert_eq!(g.to_string(), SAMPLE);
        assert_eq!(parse_grid(&g.to_string()), Ok(g));
    }

    #[test]
    fn rejects_zero_digit() {
        assert_eq!(
            parse_grid("11\n10"),
            Err(GridError::InvalidGrid(InvalidGrid::InvalidDigit {
                pos: Point::new(1, 1),
                ch: '0'
            }))
        );
    }

    #[test]
    fn rejects_non_digit() {
        let err = parse_grid("1a1").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidGrid(InvalidGrid::InvalidDigit {
                pos: Point::new(1, 0),
                ch: 'a'
            })
        );
    }

    #[test]
    fn rejects_inconsistent_width() {
        assert_eq!(
            parse_grid("123\n12"),
            Err(GridError::InvalidGrid(InvalidGrid::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }))
        );
    }

    #[test]
    fn rejects_blank_lines_and_empty_input() {
        assert_eq!(
            parse_grid("12\n\n12"),
            Err(GridError::InvalidGrid(InvalidGrid::EmptyRow { row: 1 }))
        );
        assert_eq!(
            parse_grid("  \n"),
            Err(GridError::InvalidGrid(InvalidGrid::Empty))
        );
    }
}
