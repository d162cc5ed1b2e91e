use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpSetDataError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Set not found in table columns: `{0}`")]
    MissingKey(String),

    #[error("Arrow error: `{0}`")]
    ArrowError(#[from] ArrowError),

    #[error("IO error: `{0}`")]
    IoError(#[from] std::io::Error),
}
