use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid cell size: {0}")]
    InvalidCellSize(String),
}
