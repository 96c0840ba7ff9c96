//! Scaling dimensions and bitmaps for the current display

use crate::{
    ConfiguredDisplay, DisplayInfoProvider, DisplayResult, HeightAxis, ScaleFactor, ScalerConfig,
};
use dpiscale_core::{Icon, Pix};
use dpiscale_transform::{ScaleOptions, scale_to_size};
use tracing::{debug, trace};

/// Converts nominal (96 DPI) sizes into physical pixels for one display
///
/// The factor is measured once, at construction; build a new scaler if the
/// display changes.
///
/// # Examples
///
/// ```
/// use dpiscale_display::{DisplayScaler, FixedDisplay};
///
/// let scaler = DisplayScaler::new(&FixedDisplay::uniform(144.0)).unwrap();
/// assert_eq!(scaler.scale_width(100.0), 150);
/// assert_eq!(scaler.scale_height(-10.0), -15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayScaler {
    factor: ScaleFactor,
    config: ScalerConfig,
}

impl DisplayScaler {
    /// Measure `provider` with the default configuration.
    ///
    /// # Errors
    ///
    /// Provider failures are returned unchanged; an unusable reading gives
    /// [`DisplayError::InvalidDpi`](crate::DisplayError::InvalidDpi).
    pub fn new<P: DisplayInfoProvider + ?Sized>(provider: &P) -> DisplayResult<Self> {
        Self::with_config(provider, ScalerConfig::default())
    }

    /// Measure `provider` with `config`.
    ///
    /// A DPI set in the configuration replaces the provider's reading and
    /// the provider is not queried.
    pub fn with_config<P: DisplayInfoProvider + ?Sized>(
        provider: &P,
        config: ScalerConfig,
    ) -> DisplayResult<Self> {
        let dpi = ConfiguredDisplay::new(config.dpi, provider).dpi()?;
        let factor = ScaleFactor::from_dpi(dpi)?;
        debug!(
            %dpi,
            %factor,
            height_axis = ?config.height_axis,
            rounding = ?config.rounding,
            "measured display"
        );
        Ok(Self::from_factor(factor, config))
    }

    /// Measure `provider` with [`ScalerConfig::load`].
    pub fn from_env<P: DisplayInfoProvider + ?Sized>(provider: &P) -> DisplayResult<Self> {
        Self::with_config(provider, ScalerConfig::load())
    }

    /// Use an already known factor.
    pub fn from_factor(factor: ScaleFactor, config: ScalerConfig) -> Self {
        Self { factor, config }
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        self.factor
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// Nominal width in physical pixels.
    ///
    /// Zero and negative values are scaled like any other.
    pub fn scale_width(&self, width: f32) -> i32 {
        self.config.rounding.apply(width * self.factor.horizontal())
    }

    /// Nominal height in physical pixels, using the configured axis.
    pub fn scale_height(&self, height: f32) -> i32 {
        let factor = match self.config.height_axis {
            HeightAxis::Vertical => self.factor.vertical(),
            HeightAxis::Horizontal => self.factor.horizontal(),
        };
        self.config.rounding.apply(height * factor)
    }

    /// Both dimensions at once.
    pub fn scale_size(&self, width: f32, height: f32) -> (i32, i32) {
        (self.scale_width(width), self.scale_height(height))
    }

    /// Redraw `image` at its scaled size.
    ///
    /// The result has the same depth and samples per pixel, and carries the
    /// source's resolution unchanged. Interpolation is bicubic over
    /// premultiplied alpha, with mirrored tiling past the source edges.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-dimension error when either scaled side is zero
    /// or negative, or the scaled bitmap is too large to allocate.
    pub fn scale_image(&self, image: &Pix) -> DisplayResult<Pix> {
        let (width, height) = self.scale_size(image.width() as f32, image.height() as f32);
        trace!(
            from_width = image.width(),
            from_height = image.height(),
            width,
            height,
            "scaling image"
        );
        Ok(scale_to_size(image, width, height, &ScaleOptions::high_quality())?)
    }

    /// Render `icon` as a bitmap at its scaled size.
    pub fn scale_icon(&self, icon: &Icon) -> DisplayResult<Pix> {
        self.scale_image(&icon.to_bitmap())
    }
}
