use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: isize, size: usize },

    #[error("Invalid slice: {0}")]
    InvalidSlice(String),

    #[error("Time domain mismatch: {0}")]
    DomainMismatch(String),

    #[error("Cast error: {0}")]
    Cast(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
