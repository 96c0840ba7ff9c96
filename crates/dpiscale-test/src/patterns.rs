//! Synthetic test images
//!
//! Deterministic patterns so that tests need no image files on disk.
//! Every pattern is stamped with the resolution passed in.

use dpiscale_core::{Pix, PixMut, PixelDepth, Result, color};

/// Uniform RGBA image.
pub fn solid_rgba(width: u32, height: u32, rgba: [u8; 4], res: (f32, f32)) -> Result<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_spp(4)?;
    pm.set_resolution(res.0, res.1);
    pm.data_mut().fill(color::from_channels(rgba));
    Ok(pm.into())
}

/// RGBA image whose red ramps along x, green along y, blue constant and
/// alpha opaque.
pub fn gradient_rgba(width: u32, height: u32, res: (f32, f32)) -> Result<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_spp(4)?;
    pm.set_resolution(res.0, res.1);
    for y in 0..height {
        for x in 0..width {
            let r = ramp(x, width);
            let g = ramp(y, height);
            pm.set_pixel_unchecked(x, y, color::compose_rgba(r, g, 64, 255));
        }
    }
    Ok(pm.into())
}

/// 8 bpp horizontal ramp.
pub fn gradient_gray(width: u32, height: u32, res: (f32, f32)) -> Result<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit8)?;
    pm.set_resolution(res.0, res.1);
    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, ramp(x, width) as u32);
        }
    }
    Ok(pm.into())
}

/// Opaque black/white checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32, res: (f32, f32)) -> Result<Pix> {
    let cell = cell.max(1);
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_spp(4)?;
    pm.set_resolution(res.0, res.1);
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 { 0 } else { 255 };
            pm.set_pixel_unchecked(x, y, color::compose_rgba(v, v, v, 255));
        }
    }
    Ok(pm.into())
}

fn ramp(i: u32, n: u32) -> u8 {
    if n <= 1 {
        return 0;
    }
    ((i as u64 * 255) / (n as u64 - 1)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let pix = gradient_rgba(5, 3, (96.0, 96.0)).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some((0, 0, 64, 255)));
        assert_eq!(pix.get_rgba(4, 2), Some((255, 255, 64, 255)));
        assert!(pix.has_alpha());
    }

    #[test]
    fn test_solid_carries_resolution() {
        let pix = solid_rgba(3, 3, [1, 2, 3, 4], (72.0, 300.0)).unwrap();
        assert_eq!(pix.resolution(), (72.0, 300.0));
        assert_eq!(pix.get_rgba(2, 2), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_checkerboard_cells() {
        let pix = checkerboard(4, 4, 2, (96.0, 96.0)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(2, 0), Some((255, 255, 255)));
        assert_eq!(pix.get_rgb(2, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_gray_ramp() {
        let pix = gradient_gray(3, 1, (0.0, 0.0)).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(1, 0), Some(127));
        assert_eq!(pix.get_pixel(2, 0), Some(255));
    }
}
