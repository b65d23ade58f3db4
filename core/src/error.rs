use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("Grid dimensions must be non-zero")]
    InvalidDimensions,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Start coordinate does not hold the start room")]
    GridMismatch,
}

pub type Result<T> = core::result::Result<T, GenError>;
