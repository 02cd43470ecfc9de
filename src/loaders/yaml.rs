use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::types::{CellSize, WalkError};
use crate::walker::GridWalker;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WalkerMetadata {
    cell_size: CellSpec,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSpec {
    Square(f64),
    Rect { width: f64, height: f64 },
}

impl CellSpec {
    fn to_cell_size(&self) -> CellSize {
        match *self {
            Self::Square(size) => CellSize::square(size),
            Self::Rect { width, height } => CellSize::new(width, height),
        }
    }
}

/// Reads a walker configuration file.
///
/// ```yaml
/// cell_size:
///   width: 20.0
///   height: 10.0
/// ```
///
/// `cell_size: 0.5` is accepted as shorthand for square cells.
pub fn load_walker(yaml_path: impl AsRef<Path>) -> Result<GridWalker, WalkError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let walker = parse_walker(&yaml_str)?;
    debug!(
        path = %yaml_path.display(),
        cell_width = walker.cell_width(),
        cell_height = walker.cell_height(),
        "loaded walker config"
    );
    Ok(walker)
}

pub(crate) fn parse_walker(yaml_str: &str) -> Result<GridWalker, WalkError> {
    let metadata: WalkerMetadata = serde_yaml::from_str(yaml_str)?;
    let cell_size = metadata.cell_size.to_cell_size();
    cell_size.validate()?;
    Ok(GridWalker::from_cell_size(cell_size))
}

impl GridWalker {
    /// Builds a walker from the YAML accepted by [`load_walker`].
    pub fn from_yaml_str(yaml_str: &str) -> Result<Self, WalkError> {
        parse_walker(yaml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_shorthand() {
        let walker = parse_walker("cell_size: 0.5\n").expect("config should parse");
        assert_eq!(*walker.cell_size(), CellSize::square(0.5));
    }

    #[test]
    fn rectangular_cells() {
        let walker = parse_walker("cell_size:\n  width: 20\n  height: 10\n")
            .expect("config should parse");
        assert_eq!(*walker.cell_size(), CellSize::new(20.0, 10.0));
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let err = parse_walker("cell_size: { width: 20.0, height: 0.0 }").unwrap_err();
        assert!(matches!(err, WalkError::InvalidCellSize(_)), "{err}");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse_walker("cell_size: 1.0\nresolution: 0.05\n").unwrap_err();
        assert!(matches!(err, WalkError::Yaml(_)), "{err}");
    }

    #[test]
    fn rejects_missing_cell_size() {
        assert!(parse_walker("{}").is_err());
    }
}
