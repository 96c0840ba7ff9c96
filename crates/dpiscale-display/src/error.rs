//! Error types for dpiscale-display

use thiserror::Error;

/// Errors raised while measuring the display or scaling for it
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The display subsystem could not be queried (no display attached,
    /// toolkit not initialized, ...)
    #[error("display unavailable: {0}")]
    Unavailable(String),

    /// The display reported a DPI that cannot produce a scale factor
    #[error("invalid DPI reading: {x}x{y}")]
    InvalidDpi { x: f32, y: f32 },

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Resampling error, including a target bitmap that is empty or too
    /// large to allocate
    #[error("transform error: {0}")]
    Transform(#[from] dpiscale_transform::TransformError),
}

/// Result type for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;
