//! Points in continuous space and the integer cell coordinates they map to.

use std::fmt;

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// A position in continuous (world) space.
///
/// Double precision keeps boundary-aligned inputs stable when they are divided
/// by the cell size.
pub type Point = DVec2;

/// Grid cell identified by its column and row.
///
/// Columns grow with `x` and rows grow with `y`. A coordinate carries no
/// identity beyond its two fields.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub column: i32,
    pub row: i32,
}

impl Coordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Manhattan distance in cells. Consecutive cells of a traversal are
    /// always exactly 1 apart.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl From<IVec2> for Coordinate {
    fn from(cell: IVec2) -> Self {
        Self::new(cell.x, cell.y)
    }
}

impl From<Coordinate> for IVec2 {
    fn from(coord: Coordinate) -> Self {
        IVec2::new(coord.column, coord.row)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.column, coord.row)
    }
}

/// Index of the cell containing `position` along one axis.
///
/// Values exactly on a boundary belong to the cell whose lower edge is that
/// boundary. Positions beyond the `i32` range of cells saturate to
/// `i32::MIN` or `i32::MAX`.
#[inline]
pub fn space_to_grid_units(position: f64, cell_size: f64) -> i32 {
    (position / cell_size).floor() as i32
}

/// Unit vector pointing from `start` to `end`, or zero for a zero-length
/// segment.
///
/// Any two distinct finite points give a non-zero direction, including spans
/// too short or too long for their length to be representable.
pub fn direction(start: Point, end: Point) -> DVec2 {
    let mut delta = end - start;
    if !delta.is_finite() {
        // Halving both ends keeps the difference finite.
        delta = end * 0.5 - start * 0.5;
    }

    let scale = delta.abs().max_element();
    if scale == 0.0 || !scale.is_finite() {
        return DVec2::ZERO;
    }
    (delta / scale).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn grid_units_floor_towards_negative_infinity() {
        assert_eq!(space_to_grid_units(0.0, 20.0), 0);
        assert_eq!(space_to_grid_units(19.999, 20.0), 0);
        assert_eq!(space_to_grid_units(20.0, 20.0), 1);
        assert_eq!(space_to_grid_units(-0.5, 20.0), -1);
        assert_eq!(space_to_grid_units(-20.0, 20.0), -1);
        assert_eq!(space_to_grid_units(-20.5, 20.0), -2);
    }

    #[test]
    fn direction_is_normalised() {
        let dir = direction(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_relative_eq!(dir.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(dir.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_direction_is_zero() {
        let p = Point::new(3.5, -2.0);
        assert_eq!(direction(p, p), DVec2::ZERO);
    }

    #[test]
    fn subnormal_span_has_a_direction() {
        let dir = direction(Point::new(-5e-324, 0.5), Point::new(0.0, 0.5));
        assert_eq!(dir, DVec2::X);
    }

    #[test]
    fn overflowing_span_has_a_direction() {
        let dir = direction(Point::new(-1e308, 0.5), Point::new(1e308, 0.5));
        assert_eq!(dir, DVec2::X);

        let dir = direction(Point::new(1e308, 1e308), Point::new(-1e308, -1e308));
        assert_relative_eq!(dir.x, -std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(dir.y, -std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn coordinate_conversions() {
        let coord = Coordinate::new(-3, 7);
        assert_eq!(IVec2::from(coord), IVec2::new(-3, 7));
        assert_eq!(Coordinate::from(IVec2::new(-3, 7)), coord);
        assert_eq!(<(i32, i32)>::from(coord), (-3, 7));
        assert_eq!(coord.to_string(), "(-3, 7)");
    }

    #[test]
    fn manhattan_distance() {
        let a = Coordinate::new(0, 0);
        assert_eq!(a.manhattan_distance(&Coordinate::new(1, 0)), 1);
        assert_eq!(a.manhattan_distance(&Coordinate::new(-2, 3)), 5);
    }
}
