use std::ops::Range;

use image::{DynamicImage, RgbImage};

/// Read-only `height x width` luminance matrix, row-major.
///
/// Built once per analysis and shared (by reference) with every estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

// BT.601 luma weights in 14-bit fixed point
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + (1 << (LUMA_SHIFT - 1)))
        >> LUMA_SHIFT;
    y.min(255) as u8
}

impl GrayscaleGrid {
    /// Wrap raw luminance values. Returns `None` unless `pixels.len() == width * height`
    /// and both dimensions are non-zero.
    pub fn from_luma(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Colour to gray conversion. Alpha, if any, is ignored.
    pub fn from_rgb(img: &RgbImage) -> Option<Self> {
        let pixels = img.pixels().map(|p| luma(p[0], p[1], p[2])).collect();
        Self::from_luma(img.width() as usize, img.height() as usize, pixels)
    }

    pub fn from_dynamic(img: &DynamicImage) -> Option<Self> {
        Self::from_rgb(&img.to_rgb8())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Mean of each row restricted to `columns`. Length is `height`.
    /// An empty (or out of bounds) range yields all zeros.
    pub fn row_means(&self, columns: Range<usize>) -> Vec<f64> {
        let end = columns.end.min(self.width);
        let start = columns.start.min(end);
        if start == end {
            return vec![0.0; self.height];
        }
        let n = (end - start) as f64;
        self.rows()
            .map(|row| row[start..end].iter().map(|&v| v as u64).sum::<u64>() as f64 / n)
            .collect()
    }

    /// Mean of each column over all rows. Length is `width`.
    pub fn column_means(&self) -> Vec<f64> {
        let mut sums = vec![0u64; self.width];
        for row in self.rows() {
            for (sum, &v) in sums.iter_mut().zip(row) {
                *sum += v as u64;
            }
        }
        let n = self.height as f64;
        sums.into_iter().map(|s| s as f64 / n).collect()
    }
}
