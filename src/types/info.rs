//! Grid cell dimensions.

use serde::{Deserialize, Serialize};

use crate::types::geometry::space_to_grid_units;
use crate::types::{Coordinate, Point, WalkError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Width of a cell in world units.
    pub width: f64,
    /// Height of a cell in world units.
    pub height: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl CellSize {
    /// Unchecked. Non-positive sizes produce meaningless traversals.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    /// Like [`CellSize::new`] but rejects sizes that are not positive and finite.
    pub fn try_new(width: f64, height: f64) -> Result<Self, WalkError> {
        let size = Self::new(width, height);
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<(), WalkError> {
        check_axis("width", self.width)?;
        check_axis("height", self.height)
    }

    /// Cell containing `point`.
    #[inline]
    pub fn coordinate_of(&self, point: Point) -> Coordinate {
        Coordinate::new(
            space_to_grid_units(point.x, self.width),
            space_to_grid_units(point.y, self.height),
        )
    }

    /// Lower corner of `coord` in world units.
    #[inline]
    pub fn cell_origin(&self, coord: Coordinate) -> Point {
        Point::new(
            coord.column as f64 * self.width,
            coord.row as f64 * self.height,
        )
    }
}

fn check_axis(axis: &str, value: f64) -> Result<(), WalkError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WalkError::InvalidCellSize(format!(
            "cell {axis} must be positive and finite, got {value}"
        )))
    }
}
