//! Bitmaps
//!
//! [`Pix`] is what every scaling operation takes and returns. Alongside its
//! pixels it records the horizontal and vertical resolution it was authored
//! at, which a scaled copy must report unchanged.
//!
//! Pixels live in 32-bit words, one row after another, each row padded to a
//! whole word. An 8 bpp row packs four gray values per word starting at the
//! high byte; a 32 bpp pixel is one word laid out as `0xRRGGBBAA`.
//!
//! A `Pix` is cheap to clone and never changes. Edits go through
//! [`PixMut`], obtained with [`Pix::try_into_mut`] (no copy if unshared) or
//! [`Pix::to_mut`] (always copies) and turned back with `into()`.

mod access;

pub use access::*;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bits per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// Gray, one byte per pixel
    Bit8 = 8,
    /// RGB or RGBA, one word per pixel
    Bit32 = 32,
}

impl PixelDepth {
    pub fn bits(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone)]
struct Bitmap {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 1 for gray, 3 for RGB, 4 for RGBA
    spp: u32,
    /// words per row
    wpl: u32,
    /// pixels per inch; 0 when unknown
    xres: f32,
    yres: f32,
    data: Vec<u32>,
}

impl Bitmap {
    fn row_range(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.wpl as usize;
        start..start + self.wpl as usize
    }
}

/// An immutable, shareable bitmap
///
/// # Examples
///
/// ```
/// use dpiscale_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(64, 32, PixelDepth::Bit32).unwrap();
/// assert_eq!((pix.width(), pix.height()), (64, 32));
/// assert_eq!(pix.resolution(), (0.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<Bitmap>,
}

impl Pix {
    /// Allocate a zero-filled bitmap with unknown resolution.
    ///
    /// 32 bpp bitmaps start out as RGB (`spp == 3`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if a side is 0 or the pixels cannot be
    /// allocated.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        let invalid = || Error::InvalidDimension {
            width: width.into(),
            height: height.into(),
        };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let wpl = u32::try_from((u64::from(width) * u64::from(depth.bits())).div_ceil(32))
            .map_err(|_| invalid())?;
        let words = (wpl as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= isize::MAX as usize / 4)
            .ok_or_else(invalid)?;
        let mut data = Vec::new();
        data.try_reserve_exact(words).map_err(|_| invalid())?;
        data.resize(words, 0);

        let bitmap = Bitmap {
            width,
            height,
            depth,
            spp: if depth == PixelDepth::Bit32 { 3 } else { 1 },
            wpl,
            xres: 0.0,
            yres: 0.0,
            data,
        };
        Ok(Pix {
            inner: Arc::new(bitmap),
        })
    }

    /// Allocate from signed sizes, as produced by scaling arithmetic.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] carrying the requested sizes if either
    /// is `<= 0` or the bitmap is too large to allocate.
    pub fn with_size(width: i32, height: i32, depth: PixelDepth) -> Result<Self> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Self::new(w, h, depth),
            _ => Err(Error::InvalidDimension {
                width: width.into(),
                height: height.into(),
            }),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Horizontal pixels per inch, 0 if unknown.
    #[inline]
    pub fn xres(&self) -> f32 {
        self.inner.xres
    }

    /// Vertical pixels per inch, 0 if unknown.
    #[inline]
    pub fn yres(&self) -> f32 {
        self.inner.yres
    }

    /// `(xres, yres)`
    #[inline]
    pub fn resolution(&self) -> (f32, f32) {
        (self.inner.xres, self.inner.yres)
    }

    /// True for 32 bpp bitmaps whose fourth byte is meaningful.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.depth == PixelDepth::Bit32 && self.inner.spp == 4
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Words of row `y`, padding included. Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row_range(y)]
    }

    /// Same width, height and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        let (a, b) = (&self.inner, &other.inner);
        (a.width, a.height, a.depth) == (b.width, b.height, b.depth)
    }

    /// Copy the pixels into a bitmap that shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(Bitmap::clone(&self.inner)),
        }
    }

    /// Take the bitmap for editing without copying.
    ///
    /// Gives `self` back if other clones still share it.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// An editable copy.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: Bitmap::clone(&self.inner),
        }
    }
}

/// A bitmap being edited
#[derive(Debug)]
pub struct PixMut {
    inner: Bitmap,
}

impl PixMut {
    /// Same as [`Pix::new`], ready for editing.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        let pix = Pix::new(width, height, depth)?;
        Ok(pix.try_into_mut().unwrap_or_else(|shared| shared.to_mut()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub fn xres(&self) -> f32 {
        self.inner.xres
    }

    #[inline]
    pub fn yres(&self) -> f32 {
        self.inner.yres
    }

    pub fn set_resolution(&mut self, xres: f32, yres: f32) {
        self.inner.xres = xres;
        self.inner.yres = yres;
    }

    /// Take over `src`'s resolution exactly.
    pub fn copy_resolution_from(&mut self, src: &Pix) {
        (self.inner.xres, self.inner.yres) = src.resolution();
    }

    /// Change the samples per pixel: 1 at 8 bpp, 3 or 4 at 32 bpp.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for any other combination.
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        let depth = self.inner.depth;
        match (depth, spp) {
            (PixelDepth::Bit8, 1) | (PixelDepth::Bit32, 3 | 4) => {
                self.inner.spp = spp;
                Ok(())
            }
            _ => Err(Error::InvalidParameter(format!(
                "{} samples per pixel at {} bpp",
                spp,
                depth.bits()
            ))),
        }
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Words of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row_range(y);
        &mut self.inner.data[range]
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gray() {
        let pix = Pix::new(30, 2, PixelDepth::Bit8).unwrap();
        assert_eq!((pix.width(), pix.height()), (30, 2));
        assert_eq!(pix.depth().bits(), 8);
        assert_eq!(pix.spp(), 1);
        // 30 bytes round up to 8 words
        assert_eq!(pix.wpl(), 8);
        assert_eq!(pix.data().len(), 16);
        assert!(!pix.has_alpha());
    }

    #[test]
    fn test_new_color_defaults_to_rgb() {
        let pix = Pix::new(7, 3, PixelDepth::Bit32).unwrap();
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.wpl(), 7);
        assert!(pix.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_zero_side_rejected() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert!(matches!(
                Pix::new(w, h, PixelDepth::Bit8),
                Err(Error::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_with_size_reports_request() {
        assert!(Pix::with_size(10, 10, PixelDepth::Bit32).is_ok());
        assert!(matches!(
            Pix::with_size(-3, 10, PixelDepth::Bit32),
            Err(Error::InvalidDimension { width: -3, height: 10 })
        ));
        assert!(matches!(
            Pix::with_size(4, 0, PixelDepth::Bit8),
            Err(Error::InvalidDimension { width: 4, height: 0 })
        ));
    }

    #[test]
    fn test_oversized_allocation_rejected() {
        assert!(matches!(
            Pix::with_size(i32::MAX, i32::MAX, PixelDepth::Bit32),
            Err(Error::InvalidDimension {
                width: 2147483647,
                height: 2147483647
            })
        ));
        assert!(Pix::new(u32::MAX, u32::MAX, PixelDepth::Bit8).is_err());
    }

    #[test]
    fn test_clone_shares_deep_clone_copies() {
        let a = Pix::new(16, 16, PixelDepth::Bit8).unwrap();
        let shared = a.clone();
        assert_eq!(a.data().as_ptr(), shared.data().as_ptr());

        let copy = a.deep_clone();
        assert_ne!(a.data().as_ptr(), copy.data().as_ptr());
        assert_eq!(a.data(), copy.data());
    }

    #[test]
    fn test_try_into_mut_refuses_shared() {
        let a = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let b = a.clone();
        let a = a.try_into_mut().unwrap_err();
        drop(b);
        assert!(a.try_into_mut().is_ok());
    }

    #[test]
    fn test_resolution_roundtrip() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit32).unwrap();
        pm.set_resolution(144.0, 120.5);
        let pix: Pix = pm.into();
        assert_eq!(pix.resolution(), (144.0, 120.5));

        let mut other = PixMut::new(9, 9, PixelDepth::Bit8).unwrap();
        other.copy_resolution_from(&pix);
        assert_eq!((other.xres(), other.yres()), (144.0, 120.5));
    }

    #[test]
    fn test_set_spp_validates() {
        let mut pm = PixMut::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(pm.set_spp(4).is_ok());
        assert!(matches!(pm.set_spp(1), Err(Error::InvalidParameter(_))));
        let pix: Pix = pm.into();
        assert!(pix.has_alpha());

        let mut gray = PixMut::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(gray.set_spp(4).is_err());
        assert!(gray.set_spp(1).is_ok());
    }

    #[test]
    fn test_rows_are_word_padded() {
        let mut pm = PixMut::new(5, 2, PixelDepth::Bit8).unwrap();
        pm.row_data_mut(1).fill(0xAAAA_AAAA);
        let pix: Pix = pm.into();
        assert_eq!(pix.row_data(0), &[0, 0]);
        assert_eq!(pix.row_data(1).len(), 2);
    }
}
