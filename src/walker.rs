//! The traversal engine.

use std::ops::ControlFlow;

use tracing::trace;

use crate::iterators::cells::CellIterator;
use crate::types::{CellSize, Coordinate, Point, WalkError};

/// Walks line segments through a uniform grid of `cell_size` cells.
///
/// The walker only holds the cell dimensions; every call builds its own
/// traversal state, so a single walker can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridWalker {
    cell_size: CellSize,
}

impl GridWalker {
    /// Sizes are not checked. Use [`GridWalker::try_new`] for untrusted input.
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self::from_cell_size(CellSize::new(cell_width, cell_height))
    }

    pub fn try_new(cell_width: f64, cell_height: f64) -> Result<Self, WalkError> {
        CellSize::try_new(cell_width, cell_height).map(Self::from_cell_size)
    }

    pub const fn from_cell_size(cell_size: CellSize) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> &CellSize {
        &self.cell_size
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_size.width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_size.height
    }

    /// Cell containing `point`.
    pub fn coordinate_of(&self, point: impl Into<Point>) -> Coordinate {
        self.cell_size.coordinate_of(point.into())
    }

    /// Lower corner of `coord` in world units.
    pub fn cell_origin(&self, coord: Coordinate) -> Point {
        self.cell_size.cell_origin(coord)
    }

    /// Lazily yields every cell crossed between `start` and `end`.
    pub fn cells(&self, start: impl Into<Point>, end: impl Into<Point>) -> CellIterator {
        CellIterator::new(&self.cell_size, start.into(), end.into())
    }

    /// Calls `visit` once for every cell crossed between `start` and `end`,
    /// starting with the cell containing `start`.
    ///
    /// `visit` is always called at least once. Cells are never repeated, and
    /// each call receives its own copy of the coordinate.
    pub fn traverse<F>(&self, start: impl Into<Point>, end: impl Into<Point>, mut visit: F)
    where
        F: FnMut(Coordinate),
    {
        let _ = self.try_traverse(start, end, |coord| {
            visit(coord);
            ControlFlow::<()>::Continue(())
        });
    }

    /// Like [`GridWalker::traverse`], but `visit` can stop the walk by
    /// returning [`ControlFlow::Break`]. The break value is handed back.
    pub fn try_traverse<F, B>(
        &self,
        start: impl Into<Point>,
        end: impl Into<Point>,
        mut visit: F,
    ) -> ControlFlow<B>
    where
        F: FnMut(Coordinate) -> ControlFlow<B>,
    {
        let start = start.into();
        let end = end.into();
        let mut cells = self.cells(start, end);
        trace!(?start, ?end, end_cell = %cells.end(), "walking segment");

        let mut visited = 0usize;
        let flow = cells.try_for_each(|coord| {
            visited += 1;
            visit(coord)
        });

        trace!(visited, stopped_early = flow.is_break(), "walk finished");
        flow
    }
}
