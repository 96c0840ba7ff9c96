//! dpiscale-core - Basic data structures for display scaling
//!
//! This crate provides the containers that the rest of the workspace
//! operates on:
//!
//! - [`Pix`] / [`PixMut`] - Bitmap container with resolution metadata
//!   (immutable / mutable)
//! - [`Icon`] - Straight-alpha RGBA icon buffer, convertible to a [`Pix`]
//! - [`color`] - Packing helpers for 32-bit pixels

pub mod error;
pub mod icon;
pub mod pix;

pub use error::{Error, Result};
pub use icon::Icon;
pub use pix::{Pix, PixMut, PixelDepth};

/// Resolution (ppi) assumed for bitmaps that carry no resolution of their own.
pub const DEFAULT_RESOLUTION: f32 = 96.0;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Extract the four channels as an array indexed by [`RED`]..[`ALPHA`].
    #[inline]
    pub fn to_channels(pixel: u32) -> [u8; 4] {
        [red(pixel), green(pixel), blue(pixel), alpha(pixel)]
    }

    /// Inverse of [`to_channels`].
    #[inline]
    pub fn from_channels(ch: [u8; 4]) -> u32 {
        compose_rgba(ch[RED], ch[GREEN], ch[BLUE], ch[ALPHA])
    }

}
