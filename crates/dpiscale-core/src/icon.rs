//! Icon container
//!
//! An [`Icon`] is a straight-alpha RGBA buffer, four bytes per pixel in
//! row-major order. It is what hosts usually hold for window and tray
//! icons. Scaling goes through [`Icon::to_bitmap`].

use crate::error::{Error, Result};
use crate::pix::{Pix, PixMut, PixelDepth};
use crate::{DEFAULT_RESOLUTION, color};

/// RGBA icon image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl Icon {
    /// Wrap an RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty size and
    /// [`Error::BufferSize`] if `rgba.len() != width * height * 4`.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width.into(),
                height: height.into(),
            });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Icon {
            rgba,
            width,
            height,
        })
    }

    /// Icon width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Icon height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Convert to a 32 bpp RGBA bitmap at the default 96 ppi.
    pub fn to_bitmap(&self) -> Pix {
        let Ok(mut pm) = PixMut::new(self.width, self.height, PixelDepth::Bit32) else {
            unreachable!("icon dimensions are validated in from_rgba");
        };
        // spp 4 is always valid at 32 bpp
        let _ = pm.set_spp(4);
        pm.set_resolution(DEFAULT_RESOLUTION, DEFAULT_RESOLUTION);

        let w = self.width as usize;
        for (y, row) in self.rgba.chunks_exact(w * 4).enumerate() {
            let line = pm.row_data_mut(y as u32);
            for (x, px) in row.chunks_exact(4).enumerate() {
                line[x] = color::compose_rgba(px[0], px[1], px[2], px[3]);
            }
        }
        pm.into()
    }
}

impl TryFrom<&Pix> for Icon {
    type Error = Error;

    /// Build an icon from a 32 bpp bitmap. Images without alpha become opaque.
    fn try_from(pix: &Pix) -> Result<Self> {
        if pix.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(pix.depth().bits()));
        }
        let opaque = !pix.has_alpha();
        let mut rgba = Vec::with_capacity(pix.width() as usize * pix.height() as usize * 4);
        for y in 0..pix.height() {
            for &word in &pix.row_data(y)[..pix.width() as usize] {
                let (r, g, b, a) = color::extract_rgba(word);
                rgba.extend_from_slice(&[r, g, b, if opaque { 255 } else { a }]);
            }
        }
        Icon::from_rgba(rgba, pix.width(), pix.height())
    }
}
