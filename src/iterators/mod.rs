pub mod cells;

pub use cells::CellIterator;
