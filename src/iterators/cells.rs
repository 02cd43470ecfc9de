use std::iter::FusedIterator;

use glam::{DVec2, IVec2};

use crate::types::geometry::direction;
use crate::types::{CellSize, Coordinate, Point};

/// Cells crossed by a line segment, in crossing order (Amanatides & Woo).
///
/// Holds all of the per-traversal state, so one iterator belongs to one walk.
/// The start cell is always yielded, even for a zero-length segment.
#[derive(Debug, Clone)]
pub struct CellIterator {
    /// Unit step along each axis, always -1 or +1.
    step: IVec2,
    /// Distance along the segment at which the next boundary on each axis is
    /// crossed.
    t_max: DVec2,
    /// Distance along the segment covered by one whole cell on each axis.
    t_delta: DVec2,
    /// Current cell being processed.
    cell: IVec2,
    end: IVec2,
    /// Set when the next step would leave the range of `i32`.
    exhausted: bool,
}

impl CellIterator {
    pub fn new(cell_size: &CellSize, start: Point, end: Point) -> Self {
        let dir = direction(start, end);

        let cell = IVec2::from(cell_size.coordinate_of(start));
        let end_cell = IVec2::from(cell_size.coordinate_of(end));

        // A zero component falls through to -1. That axis never steps since
        // its t_max is infinite.
        let step = IVec2::new(
            if dir.x > 0.0 { 1 } else { -1 },
            if dir.y > 0.0 { 1 } else { -1 },
        );

        let (t_max_x, t_delta_x) = axis_params(start.x, dir.x, cell.x, step.x, cell_size.width);
        let (t_max_y, t_delta_y) = axis_params(start.y, dir.y, cell.y, step.y, cell_size.height);

        Self {
            step,
            t_max: DVec2::new(t_max_x, t_max_y),
            t_delta: DVec2::new(t_delta_x, t_delta_y),
            cell,
            end: end_cell,
            exhausted: false,
        }
    }

    /// Cell the segment ends in.
    pub fn end(&self) -> Coordinate {
        self.end.into()
    }

    /// True once the current cell has moved beyond the end cell on either
    /// axis, judged by the stored step direction.
    ///
    /// `cell >= end + 1` and `cell <= end - 1` are written as strict
    /// comparisons so that `end` at the edge of `i32` cannot overflow.
    fn is_past_end(&self) -> bool {
        if self.exhausted {
            return true;
        }
        let past_x = if self.step.x > 0 {
            self.cell.x > self.end.x
        } else {
            self.cell.x < self.end.x
        };
        let past_y = if self.step.y > 0 {
            self.cell.y > self.end.y
        } else {
            self.cell.y < self.end.y
        };
        past_x || past_y
    }

    /// Ties go vertical.
    #[inline]
    fn should_move_horizontally(&self) -> bool {
        self.t_max.x < self.t_max.y
    }

    fn advance(&mut self) {
        let next = if self.should_move_horizontally() {
            self.t_max.x += self.t_delta.x;
            self.cell.x.checked_add(self.step.x).map(|x| IVec2::new(x, self.cell.y))
        } else {
            self.t_max.y += self.t_delta.y;
            self.cell.y.checked_add(self.step.y).map(|y| IVec2::new(self.cell.x, y))
        };

        match next {
            Some(cell) => self.cell = cell,
            None => self.exhausted = true,
        }
    }
}

impl Iterator for CellIterator {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_past_end() {
            return None;
        }

        let current = self.cell.into();
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_past_end() {
            return (0, Some(0));
        }
        // At most every column and row between here and the end, plus the
        // current cell.
        let upper = (self.cell.x.abs_diff(self.end.x) as usize)
            .saturating_add(self.cell.y.abs_diff(self.end.y) as usize)
            .saturating_add(1);
        (1, Some(upper))
    }
}

impl FusedIterator for CellIterator {}

/// Returns `(t_max, t_delta)` for one axis.
///
/// `t_max` is the distance from `start` to the first boundary crossed when
/// moving by `step` out of cell `cell`; `t_delta` the distance between two
/// consecutive boundaries.
fn axis_params(start: f64, dir: f64, cell: i32, step: i32, cell_size: f64) -> (f64, f64) {
    if dir == 0.0 {
        return (f64::INFINITY, 0.0);
    }

    let boundary = if step > 0 {
        (cell as f64 + 1.0) * cell_size
    } else {
        cell as f64 * cell_size
    };

    let t_max = (boundary - start) / dir;
    let t_delta = cell_size * step as f64 / dir;
    (t_max, t_delta)
}
