use thiserror::Error;

pub type StripResult<T> = Result<T, StripError>;

#[derive(Debug, Error)]
pub enum StripError {
    #[error("signal must contain at least one sample")]
    EmptySignal,

    #[error("invalid row count: {requested}")]
    InvalidRowCount { requested: i64 },

    #[error("invalid render surface: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
