//! dpiscale-transform - Image resampling for dpiscale
//!
//! This crate provides the resampling used to draw a bitmap at a new size:
//!
//! - Nearest-neighbour sampling
//! - Bilinear and high-quality bicubic interpolation, with area-correct
//!   filter widening when shrinking
//! - Wrap modes for taps that fall outside the source (clamp, tile-flip)
//! - Premultiplied-alpha compositing so transparent edges do not bleed

mod error;
mod resample;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use resample::WrapMode;
pub use scale::{ScaleMethod, ScaleOptions, scale, scale_by_sampling, scale_to_size};
