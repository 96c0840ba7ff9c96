//! dpiscale-test - Regression test framework for dpiscale
//!
//! Tests record numbered checks on a [`RegParams`], which keeps going after
//! a failed check so that one run reports every mismatch, then assert on
//! [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```ignore
//! use dpiscale_test::RegParams;
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_values(150.0, scaled.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every check, not only failures

mod params;
pub mod patterns;

pub use params::{RegParams, RegTestMode};
pub use patterns::{checkerboard, gradient_gray, gradient_rgba, solid_rgba};
