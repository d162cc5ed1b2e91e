use thiserror::Error;
use upset_data::UpSetDataError;

#[derive(Error, Debug)]
pub enum UpSetChartError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("css color parse error for `{color}`: {source}")]
    InvalidColor {
        color: String,
        source: csscolorparser::ParseColorError,
    },

    #[error("Data error: {0}")]
    DataError(#[from] UpSetDataError),

    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
