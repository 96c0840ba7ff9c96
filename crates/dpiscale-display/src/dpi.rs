//! DPI readings and the scale factor derived from them

use crate::{DisplayError, DisplayResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Density of a "normal" definition screen, at which the scale factor is 1.0.
pub const BASELINE_DPI: f32 = 96.0;

/// Horizontal and vertical dots per inch reported by a display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dpi {
    pub x: f32,
    pub y: f32,
}

impl Dpi {
    pub const BASELINE: Dpi = Dpi::uniform(BASELINE_DPI);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same density on both axes.
    pub const fn uniform(dpi: f32) -> Self {
        Self { x: dpi, y: dpi }
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Ratio of a display's DPI to [`BASELINE_DPI`], per axis
///
/// Both components are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    horizontal: f32,
    vertical: f32,
}

impl ScaleFactor {
    /// Factor of an unscaled (96 DPI) display.
    pub const IDENTITY: ScaleFactor = ScaleFactor {
        horizontal: 1.0,
        vertical: 1.0,
    };

    /// Derive the factor from a DPI reading.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidDpi`] if either axis is negative or
    /// not finite.
    pub fn from_dpi(dpi: Dpi) -> DisplayResult<Self> {
        Self::new(dpi.x / BASELINE_DPI, dpi.y / BASELINE_DPI)
            .map_err(|_| DisplayError::InvalidDpi { x: dpi.x, y: dpi.y })
    }

    /// Build a factor directly.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidDpi`] (expressed in DPI) if either
    /// component is negative or not finite.
    pub fn new(horizontal: f32, vertical: f32) -> DisplayResult<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(horizontal) || !valid(vertical) {
            return Err(DisplayError::InvalidDpi {
                x: horizontal * BASELINE_DPI,
                y: vertical * BASELINE_DPI,
            });
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Whether both axes are unscaled.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.horizontal, self.vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_from_dpi() {
        let f = ScaleFactor::from_dpi(Dpi::uniform(144.0)).unwrap();
        assert_eq!(f.horizontal(), 1.5);
        assert_eq!(f.vertical(), 1.5);

        let f = ScaleFactor::from_dpi(Dpi::new(192.0, 120.0)).unwrap();
        assert_eq!(f.horizontal(), 2.0);
        assert_eq!(f.vertical(), 1.25);
    }

    #[test]
    fn test_baseline_is_identity() {
        let f = ScaleFactor::from_dpi(Dpi::BASELINE).unwrap();
        assert!(f.is_identity());
        assert_eq!(ScaleFactor::default(), f);
    }

    #[test]
    fn test_zero_dpi_allowed() {
        let f = ScaleFactor::from_dpi(Dpi::uniform(0.0)).unwrap();
        assert_eq!(f.horizontal(), 0.0);
    }

    #[test]
    fn test_invalid_dpi_rejected() {
        assert!(matches!(
            ScaleFactor::from_dpi(Dpi::new(-96.0, 96.0)),
            Err(DisplayError::InvalidDpi { x, y }) if x == -96.0 && y == 96.0
        ));
        assert!(ScaleFactor::from_dpi(Dpi::new(96.0, f32::NAN)).is_err());
        assert!(ScaleFactor::from_dpi(Dpi::new(f32::INFINITY, 96.0)).is_err());
        assert!(ScaleFactor::new(1.0, -0.5).is_err());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Dpi::new(144.0, 120.0).to_string(), "144x120");
        assert_eq!(ScaleFactor::IDENTITY.to_string(), "1x1");
    }
}
