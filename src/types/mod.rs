pub mod error;
pub mod geometry;
pub mod info;

pub use error::WalkError;
pub use geometry::{Coordinate, Point};
pub use info::CellSize;
