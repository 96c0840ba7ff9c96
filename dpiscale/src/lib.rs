//! dpiscale - DPI-aware sizing for desktop applications
//!
//! Layouts, bitmaps and icons are designed for a 96 DPI screen. On denser
//! displays they have to be enlarged by the ratio of the display's DPI to
//! 96, or they end up tiny. This crate measures the display and does that
//! conversion:
//!
//! - Dimension scaling with configurable rounding
//! - Bitmap and icon redraw with bicubic, premultiplied-alpha resampling
//!
//! # Example
//!
//! ```
//! use dpiscale::display::{DisplayScaler, FixedDisplay};
//! use dpiscale::{Pix, PixelDepth};
//!
//! let scaler = DisplayScaler::new(&FixedDisplay::uniform(144.0)).unwrap();
//! assert_eq!(scaler.scale_width(100.0), 150);
//!
//! let bitmap = Pix::new(200, 100, PixelDepth::Bit32).unwrap();
//! let scaled = scaler.scale_image(&bitmap).unwrap();
//! assert_eq!((scaled.width(), scaled.height()), (300, 150));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use dpiscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use dpiscale_display as display;
pub use dpiscale_transform as transform;
