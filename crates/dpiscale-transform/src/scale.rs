//! Image scaling operations
//!
//! Provides:
//! - Sampling (nearest neighbour)
//! - Linear interpolation (tent filter)
//! - High-quality bicubic interpolation (Catmull-Rom)
//!
//! Interpolating methods widen their filter when shrinking, so downscaled
//! output is area-averaged instead of aliased.
//!
//! | Function | Size of result |
//! |---|---|
//! | [`scale`] | `round(w * scale_x)` x `round(h * scale_y)` |
//! | [`scale_to_size`] | exactly the requested size |
//! | [`scale_by_sampling`] | as [`scale`], nearest neighbour |

use crate::resample::{self, Kernel, WrapMode};
use crate::{TransformError, TransformResult};
use dpiscale_core::{Pix, PixMut, PixelDepth, color};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Bilinear interpolation
    Linear,
    /// Bicubic interpolation (sharpest, may ring slightly at hard edges)
    #[default]
    Bicubic,
}

impl ScaleMethod {
    fn kernel(self) -> Option<Kernel> {
        match self {
            ScaleMethod::Sampling => None,
            ScaleMethod::Linear => Some(Kernel::Triangle),
            ScaleMethod::Bicubic => Some(Kernel::CatmullRom),
        }
    }
}

/// How a source image is drawn into its destination rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Interpolation method
    pub method: ScaleMethod,
    /// Sampling policy beyond the source bounds
    pub wrap: WrapMode,
    /// Interpolate color premultiplied by alpha
    pub premultiply: bool,
}

impl ScaleOptions {
    /// Bicubic interpolation, tile-flip wrapping and premultiplied alpha.
    pub const fn high_quality() -> Self {
        Self {
            method: ScaleMethod::Bicubic,
            wrap: WrapMode::TileFlipXY,
            premultiply: true,
        }
    }

    /// High-quality options with a different method.
    pub const fn with_method(method: ScaleMethod) -> Self {
        Self {
            method,
            ..Self::high_quality()
        }
    }
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self::high_quality()
    }
}

/// Scale an image by the given factors
///
/// The destination size is `round(width * scale_x)` by
/// `round(height * scale_y)`.
///
/// # Arguments
/// * `pix` - Input image
/// * `scale_x` - Horizontal scale factor (e.g., 2.0 = double width)
/// * `scale_y` - Vertical scale factor
/// * `method` - Scaling algorithm to use
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number, and a core error if the rounded size is empty.
pub fn scale(pix: &Pix, scale_x: f32, scale_y: f32, method: ScaleMethod) -> TransformResult<Pix> {
    check_factor(scale_x)?;
    check_factor(scale_y)?;
    let (w, h) = scaled_dims(pix, scale_x, scale_y);
    scale_to_size(pix, w, h, &ScaleOptions::with_method(method))
}

/// Scale an image using nearest-neighbor sampling
///
/// # Arguments
/// * `pix` - Input image
/// * `scale_x` - Horizontal scale factor
/// * `scale_y` - Vertical scale factor
pub fn scale_by_sampling(pix: &Pix, scale_x: f32, scale_y: f32) -> TransformResult<Pix> {
    scale(pix, scale_x, scale_y, ScaleMethod::Sampling)
}

/// Draw an image into a new bitmap of exactly `width` x `height`
///
/// The destination keeps the source depth and samples per pixel, and
/// copies the source resolution unchanged. The source is not modified.
///
/// # Errors
///
/// Returns [`TransformError::Core`] wrapping
/// [`dpiscale_core::Error::InvalidDimension`] if either size is `<= 0` or
/// the destination is too large to allocate.
pub fn scale_to_size(pix: &Pix, width: i32, height: i32, options: &ScaleOptions) -> TransformResult<Pix> {
    let mut dst = Pix::with_size(width, height, pix.depth())?
        .try_into_mut()
        .unwrap_or_else(|shared| shared.to_mut());
    dst.set_spp(pix.spp())?;
    dst.copy_resolution_from(pix);

    match options.method.kernel() {
        None => sample_into(pix, &mut dst),
        Some(kernel) => interpolate_into(pix, &mut dst, kernel, options),
    }
    Ok(dst.into())
}

fn check_factor(f: f32) -> TransformResult<()> {
    if f.is_finite() && f > 0.0 {
        Ok(())
    } else {
        Err(TransformError::InvalidScaleFactor(format!(
            "scale factor must be positive and finite, got {f}"
        )))
    }
}

fn scaled_dims(pix: &Pix, scale_x: f32, scale_y: f32) -> (i32, i32) {
    let w = (pix.width() as f64 * scale_x as f64).round();
    let h = (pix.height() as f64 * scale_y as f64).round();
    (w.min(i32::MAX as f64) as i32, h.min(i32::MAX as f64) as i32)
}

fn sample_into(src: &Pix, dst: &mut PixMut) {
    let (sw, sh) = (src.width() as usize, src.height() as usize);
    let (dw, dh) = (dst.width() as usize, dst.height() as usize);
    let xmap: Vec<u32> = (0..dw)
        .map(|x| resample::nearest_index(x, sw, dw) as u32)
        .collect();

    for y in 0..dh {
        let sy = resample::nearest_index(y, sh, dh) as u32;
        for (x, &sx) in xmap.iter().enumerate() {
            let val = src.get_pixel_unchecked(sx, sy);
            dst.set_pixel_unchecked(x as u32, y as u32, val);
        }
    }
}

fn interpolate_into(src: &Pix, dst: &mut PixMut, kernel: Kernel, options: &ScaleOptions) {
    let (sw, sh) = (src.width() as usize, src.height() as usize);
    let (dw, dh) = (dst.width() as usize, dst.height() as usize);

    match src.depth() {
        PixelDepth::Bit8 => {
            let mut plane = Vec::with_capacity(sw * sh);
            for y in 0..sh as u32 {
                for x in 0..sw as u32 {
                    plane.push(src.get_pixel_unchecked(x, y) as f32);
                }
            }
            let out = resample::resize_plane(&plane, 1, (sw, sh), (dw, dh), kernel, options.wrap);
            for (i, v) in out.iter().enumerate() {
                let (x, y) = ((i % dw) as u32, (i / dw) as u32);
                dst.set_pixel_unchecked(x, y, to_byte(*v) as u32);
            }
        }
        PixelDepth::Bit32 => {
            let has_alpha = src.has_alpha();
            let premultiply = options.premultiply && has_alpha;

            let mut plane = Vec::with_capacity(sw * sh * 4);
            for y in 0..sh as u32 {
                for &word in &src.row_data(y)[..sw] {
                    let [r, g, b, a] = color::to_channels(word);
                    let a = if has_alpha { a as f32 } else { 255.0 };
                    let k = if premultiply { a / 255.0 } else { 1.0 };
                    plane.extend_from_slice(&[r as f32 * k, g as f32 * k, b as f32 * k, a]);
                }
            }

            let out = resample::resize_plane(&plane, 4, (sw, sh), (dw, dh), kernel, options.wrap);
            for (i, px) in out.chunks_exact(4).enumerate() {
                let (x, y) = ((i % dw) as u32, (i / dw) as u32);
                let a = to_byte(px[3]);
                let (r, g, b) = if premultiply {
                    unpremultiply(px, a)
                } else {
                    (to_byte(px[0]), to_byte(px[1]), to_byte(px[2]))
                };
                let a = if has_alpha { a } else { 255 };
                dst.set_pixel_unchecked(x, y, color::compose_rgba(r, g, b, a));
            }
        }
    }
}

fn unpremultiply(px: &[f32], a: u8) -> (u8, u8, u8) {
    if a == 0 {
        return (0, 0, 0);
    }
    let k = 255.0 / a as f32;
    (to_byte(px[0] * k), to_byte(px[1] * k), to_byte(px[2] * k))
}

#[inline]
fn to_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpiscale_core::Error;

    fn rgba(w: u32, h: u32) -> Pix {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit32).unwrap();
        pm.set_spp(4).unwrap();
        pm.set_resolution(120.0, 72.0);
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 37 + y * 91) % 256) as u8;
                pm.set_rgba(x, y, v, 255 - v, v / 2, 255).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_scale_dims_and_resolution() {
        let pix = rgba(200, 100);
        let out = scale(&pix, 1.5, 1.5, ScaleMethod::Bicubic).unwrap();
        assert_eq!((out.width(), out.height()), (300, 150));
        assert_eq!(out.resolution(), (120.0, 72.0));
        assert_eq!(out.spp(), 4);
    }

    #[test]
    fn test_identity_is_exact() {
        let pix = rgba(13, 7);
        for method in [ScaleMethod::Bicubic, ScaleMethod::Linear, ScaleMethod::Sampling] {
            let out = scale_to_size(&pix, 13, 7, &ScaleOptions::with_method(method)).unwrap();
            assert_eq!(out.data(), pix.data(), "{method:?}");
        }
    }

    #[test]
    fn test_invalid_factor() {
        let pix = rgba(4, 4);
        assert!(matches!(
            scale(&pix, 0.0, 1.0, ScaleMethod::Linear),
            Err(TransformError::InvalidScaleFactor(_))
        ));
        assert!(scale(&pix, f32::NAN, 1.0, ScaleMethod::Linear).is_err());
        assert!(scale(&pix, 1.0, -2.0, ScaleMethod::Linear).is_err());
    }

    #[test]
    fn test_empty_target_rejected() {
        let pix = rgba(4, 4);
        let err = scale_to_size(&pix, 0, 4, &ScaleOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Core(Error::InvalidDimension { width: 0, height: 4 })
        ));
        assert!(scale_to_size(&pix, 4, -1, &ScaleOptions::default()).is_err());
    }

    #[test]
    fn test_source_not_mutated() {
        let pix = rgba(10, 10);
        let before = pix.data().to_vec();
        let _ = scale(&pix, 2.0, 0.5, ScaleMethod::Bicubic).unwrap();
        assert_eq!(pix.data(), &before[..]);
    }

    #[test]
    fn test_transparent_edges_do_not_bleed() {
        // opaque red square surrounded by fully transparent green
        let mut pm = PixMut::new(8, 8, PixelDepth::Bit32).unwrap();
        pm.set_spp(4).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..6).contains(&x) && (2..6).contains(&y);
                if inside {
                    pm.set_rgba(x, y, 255, 0, 0, 255).unwrap();
                } else {
                    pm.set_rgba(x, y, 0, 255, 0, 0).unwrap();
                }
            }
        }
        let pix: Pix = pm.into();
        let out = scale_to_size(&pix, 12, 12, &ScaleOptions::high_quality()).unwrap();
        for y in 0..12 {
            for x in 0..12 {
                let (r, g, _, a) = out.get_rgba(x, y).unwrap();
                if a > 16 {
                    assert!(g <= 8, "green leaked at ({x},{y}): r={r} g={g} a={a}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_stays_opaque() {
        let mut pm = PixMut::new(3, 3, PixelDepth::Bit32).unwrap();
        pm.set_rgb(1, 1, 200, 10, 10).unwrap();
        let pix: Pix = pm.into();
        assert!(!pix.has_alpha());
        let out = scale_to_size(&pix, 7, 5, &ScaleOptions::default()).unwrap();
        assert_eq!(out.spp(), 3);
        assert!((0..5).all(|y| (0..7).all(|x| out.get_rgba(x, y).unwrap().3 == 255)));
    }

    #[test]
    fn test_gray_linear_midpoint() {
        let mut pm = PixMut::new(2, 1, PixelDepth::Bit8).unwrap();
        pm.set_pixel(0, 0, 0).unwrap();
        pm.set_pixel(1, 0, 200).unwrap();
        let pix: Pix = pm.into();
        let opts = ScaleOptions {
            method: ScaleMethod::Linear,
            wrap: WrapMode::Clamp,
            premultiply: false,
        };
        let out = scale_to_size(&pix, 4, 1, &opts).unwrap();
        // centres at -0.25, 0.25, 0.75, 1.25 in source space
        assert_eq!(out.get_pixel(0, 0), Some(0));
        assert_eq!(out.get_pixel(1, 0), Some(50));
        assert_eq!(out.get_pixel(2, 0), Some(150));
        assert_eq!(out.get_pixel(3, 0), Some(200));
    }

    #[test]
    fn test_sampling_duplicates_pixels() {
        let pix = rgba(2, 2);
        let out = scale_by_sampling(&pix, 2.0, 2.0).unwrap();
        assert_eq!((out.width(), out.height()), (4, 4));
        assert_eq!(out.get_pixel(0, 0), pix.get_pixel(0, 0));
        assert_eq!(out.get_pixel(1, 1), pix.get_pixel(0, 0));
        assert_eq!(out.get_pixel(3, 2), pix.get_pixel(1, 1));
    }
}
