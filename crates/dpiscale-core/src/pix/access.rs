//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! 8 bpp pixels are packed MSB-to-LSB within each 32-bit word, so pixel 0
//! occupies the top byte of the first word. 32 bpp pixels occupy a full
//! word each.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the computed word lies outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_pixel(self.row_data(y), x, self.depth())
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the width.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        let start = (y * self.wpl()) as usize;
        let line = &self.data()[start..start + self.wpl() as usize];
        read_pixel(line, x, self.depth())
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the computed word lies outside the data buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let depth = self.depth();
        write_pixel(self.row_data_mut(y), x, depth, val);
    }

    /// Set an RGB pixel at (x, y) with full opacity.
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_rgba(x, y, r, g, b, 255)
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[inline]
fn read_pixel(line: &[u32], x: u32, depth: PixelDepth) -> u32 {
    match depth {
        PixelDepth::Bit8 => get_data_byte(line, x),
        PixelDepth::Bit32 => line[x as usize],
    }
}

#[inline]
fn write_pixel(line: &mut [u32], x: u32, depth: PixelDepth, val: u32) {
    match depth {
        PixelDepth::Bit8 => set_data_byte(line, x, val),
        PixelDepth::Bit32 => line[x as usize] = val,
    }
}

/// Get an 8-bit pixel value.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    let word = line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    (word >> shift) & 0xff
}

/// Set an 8-bit pixel value.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_byte_packing() {
        let mut line = [0u32; 2];
        set_data_byte(&mut line, 0, 0x11);
        set_data_byte(&mut line, 3, 0x44);
        set_data_byte(&mut line, 4, 0xAB);
        assert_eq!(line[0], 0x1100_0044);
        assert_eq!(line[1], 0xAB00_0000);
        assert_eq!(get_data_byte(&line, 3), 0x44);
        assert_eq!(get_data_byte(&line, 1), 0);

        // overwrite keeps neighbours
        set_data_byte(&mut line, 0, 0x22);
        assert_eq!(line[0], 0x2200_0044);
    }

    #[test]
    fn test_get_set_gray() {
        let mut pm = PixMut::new(7, 3, PixelDepth::Bit8).unwrap();
        pm.set_pixel(6, 2, 200).unwrap();
        pm.set_pixel(5, 2, 300).unwrap(); // masked to 8 bits
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(6, 2), Some(200));
        assert_eq!(pix.get_pixel(5, 2), Some(300 & 0xff));
        assert_eq!(pix.get_pixel(7, 0), None);
        assert_eq!(pix.get_rgb(0, 0), None);
    }

    #[test]
    fn test_get_set_rgba() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit32).unwrap();
        pm.set_rgba(1, 2, 10, 20, 30, 40).unwrap();
        pm.set_rgb(0, 0, 1, 2, 3).unwrap();
        assert!(pm.set_rgb(3, 0, 0, 0, 0).is_err());

        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgba(1, 2), Some((10, 20, 30, 40)));
        assert_eq!(pix.get_rgba(0, 0), Some((1, 2, 3, 255)));
        assert_eq!(pix.get_rgb(1, 2), Some((10, 20, 30)));
    }

    #[test]
    fn test_set_rgba_on_gray_fails() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            pm.set_rgba(0, 0, 1, 1, 1, 1),
            Err(Error::UnsupportedDepth(8))
        ));
    }
}
