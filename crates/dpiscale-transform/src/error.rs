//! Error types for dpiscale-transform

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error (including allocation of the destination)
    #[error("core error: {0}")]
    Core(#[from] dpiscale_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
