//! dpiscale-display - Per-display DPI scaling
//!
//! Measures the active display once and converts sizes designed for a
//! 96 DPI screen into physical pixels:
//!
//! - [`DisplayScaler`]: widths, heights, bitmaps and icons
//! - [`DisplayInfoProvider`]: how the DPI is read, injected by the host
//! - [`ScopedDisplay`] / [`GraphicsContext`]: providers backed by a
//!   toolkit context that must be released after use
//! - [`ScalerConfig`]: rounding and axis choices, optional DPI override
//!
//! # Example
//!
//! ```
//! use dpiscale_display::{DisplayScaler, FixedDisplay};
//!
//! let scaler = DisplayScaler::new(&FixedDisplay::new(144.0, 144.0)).unwrap();
//! assert_eq!(scaler.scale_size(200.0, 100.0), (300, 150));
//! ```

pub mod config;
mod dpi;
mod error;
pub mod provider;
mod scaler;

pub use config::{HeightAxis, Rounding, ScalerConfig};
pub use dpi::{BASELINE_DPI, Dpi, ScaleFactor};
pub use error::{DisplayError, DisplayResult};
pub use provider::{
    ConfiguredDisplay, ContextSource, DisplayInfoProvider, FixedDisplay, GraphicsContext,
    Headless, ScopedDisplay,
};
pub use scaler::DisplayScaler;
