//! Enumerates the cells of a uniform 2D grid crossed by a line segment, in the
//! order the segment crosses them.
//!
//! ```
//! use grid_walker::{Coordinate, GridWalker};
//!
//! let walker = GridWalker::new(20.0, 10.0);
//! let mut cells = Vec::new();
//! walker.traverse((15.0, 3.0), (30.0, 12.0), |coord| cells.push(coord));
//!
//! assert_eq!(
//!     cells,
//!     [Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(1, 1)]
//! );
//! ```

pub mod iterators;
pub mod loaders;
pub mod types;
pub mod walker;

pub use iterators::CellIterator;
pub use loaders::yaml::load_walker;
pub use types::{CellSize, Coordinate, Point, WalkError};
pub use walker::GridWalker;
