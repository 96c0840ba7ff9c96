//! Error types for dpiscale-core

use thiserror::Error;

/// Errors from allocating, accessing or converting bitmaps and icons
#[derive(Error, Debug)]
pub enum Error {
    /// A bitmap side is zero or negative, or too large to allocate
    ///
    /// Signed so that a size computed from a negative nominal value is
    /// reported as requested.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The operation is not defined at this depth
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An RGBA buffer does not match the declared icon size
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
