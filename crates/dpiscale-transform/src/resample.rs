//! Separable resampling kernels and per-axis tap tables
//!
//! A resize is done one axis at a time. For every destination index along
//! an axis we precompute the source taps and their normalized weights once,
//! then apply the table to every row (or column).
//!
//! Coordinates are pixel-centre aligned: destination pixel `i` samples the
//! source at `(i + 0.5) / scale - 0.5`.

/// Policy for taps that land outside the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Repeat the nearest edge pixel
    Clamp,
    /// Tile the image, mirroring every other tile in both axes
    #[default]
    TileFlipXY,
}

impl WrapMode {
    /// Map a possibly out-of-range index into `0..n`.
    pub fn map(self, i: i64, n: usize) -> usize {
        let n = n as i64;
        match self {
            WrapMode::Clamp => i.clamp(0, n - 1) as usize,
            WrapMode::TileFlipXY => {
                let period = 2 * n;
                let m = i.rem_euclid(period);
                if m < n {
                    m as usize
                } else {
                    (period - 1 - m) as usize
                }
            }
        }
    }
}

/// Interpolation kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kernel {
    /// Tent filter, support 1
    Triangle,
    /// Keys cubic convolution with a = -0.5, support 2
    CatmullRom,
}

impl Kernel {
    fn support(self) -> f64 {
        match self {
            Kernel::Triangle => 1.0,
            Kernel::CatmullRom => 2.0,
        }
    }

    fn weight(self, x: f64) -> f64 {
        let x = x.abs();
        match self {
            Kernel::Triangle => (1.0 - x).max(0.0),
            Kernel::CatmullRom => {
                const A: f64 = -0.5;
                if x < 1.0 {
                    ((A + 2.0) * x - (A + 3.0)) * x * x + 1.0
                } else if x < 2.0 {
                    ((A * x - 5.0 * A) * x + 8.0 * A) * x - 4.0 * A
                } else {
                    0.0
                }
            }
        }
    }
}

/// Taps contributing to one destination sample
#[derive(Debug, Clone)]
pub(crate) struct Taps {
    pub(crate) index: Vec<usize>,
    pub(crate) weight: Vec<f32>,
}

/// Build the tap table for resizing an axis of `src_len` to `dst_len`.
pub(crate) fn filter_taps(src_len: usize, dst_len: usize, kernel: Kernel, wrap: WrapMode) -> Vec<Taps> {
    let scale = dst_len as f64 / src_len as f64;
    // widen the kernel when shrinking so every source pixel contributes
    let filter_scale = if scale < 1.0 { 1.0 / scale } else { 1.0 };
    let support = kernel.support() * filter_scale;

    (0..dst_len)
        .map(|i| {
            let center = (i as f64 + 0.5) / scale - 0.5;
            let first = (center - support).ceil() as i64;
            let last = (center + support).floor() as i64;

            let mut index = Vec::with_capacity((last - first + 1).max(0) as usize);
            let mut raw = Vec::with_capacity(index.capacity());
            for j in first..=last {
                let w = kernel.weight((j as f64 - center) / filter_scale);
                if w != 0.0 {
                    index.push(wrap.map(j, src_len));
                    raw.push(w);
                }
            }

            let sum: f64 = raw.iter().sum();
            let weight = if sum.abs() > f64::EPSILON {
                raw.iter().map(|w| (w / sum) as f32).collect()
            } else {
                // Degenerate table, fall back to the nearest source pixel.
                index.clear();
                index.push(wrap.map(center.round() as i64, src_len));
                vec![1.0]
            };
            Taps { index, weight }
        })
        .collect()
}

/// Source index for nearest-neighbour sampling.
pub(crate) fn nearest_index(i: usize, src_len: usize, dst_len: usize) -> usize {
    let pos = ((i as f64 + 0.5) * src_len as f64 / dst_len as f64).floor() as usize;
    pos.min(src_len - 1)
}

/// Resize a planar float buffer of `channels` interleaved samples.
///
/// `src` has `src_w * src_h * channels` samples in row-major order.
pub(crate) fn resize_plane(
    src: &[f32],
    channels: usize,
    (src_w, src_h): (usize, usize),
    (dst_w, dst_h): (usize, usize),
    kernel: Kernel,
    wrap: WrapMode,
) -> Vec<f32> {
    let htaps = filter_taps(src_w, dst_w, kernel, wrap);
    let vtaps = filter_taps(src_h, dst_h, kernel, wrap);

    // horizontal pass: src_h rows of dst_w
    let mut tmp = vec![0.0f32; dst_w * src_h * channels];
    for y in 0..src_h {
        let src_row = &src[y * src_w * channels..(y + 1) * src_w * channels];
        let tmp_row = &mut tmp[y * dst_w * channels..(y + 1) * dst_w * channels];
        for (x, taps) in htaps.iter().enumerate() {
            let out = &mut tmp_row[x * channels..(x + 1) * channels];
            for (&sx, &w) in taps.index.iter().zip(&taps.weight) {
                let px = &src_row[sx * channels..(sx + 1) * channels];
                for c in 0..channels {
                    out[c] += px[c] * w;
                }
            }
        }
    }

    // vertical pass
    let mut dst = vec![0.0f32; dst_w * dst_h * channels];
    let row_len = dst_w * channels;
    for (y, taps) in vtaps.iter().enumerate() {
        let out = &mut dst[y * row_len..(y + 1) * row_len];
        for (&sy, &w) in taps.index.iter().zip(&taps.weight) {
            let in_row = &tmp[sy * row_len..(sy + 1) * row_len];
            for (o, v) in out.iter_mut().zip(in_row) {
                *o += v * w;
            }
        }
    }
    dst
}
