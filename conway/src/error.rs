// error.rs - Error types for the Life engine

use thiserror::Error;

/// Errors raised by grid construction and the pattern factory.
///
/// Stepping and insertion never fail; these only surface configuration mistakes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid dimensions {width}x{height} are too large to address")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
