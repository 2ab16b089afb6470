//! Deterministic synthetic chart screenshots.
//!
//! Light background with a dark price line, drawn column by column. Used by the
//! unit tests and by the `make_synthetic_charts` binary.

use image::{Rgb, RgbImage};

pub const BACKGROUND: Rgb<u8> = Rgb([245, 245, 245]);
pub const LINE: Rgb<u8> = Rgb([20, 20, 20]);

/// Draws `row_at(col)` for every column, `thickness` pixels either side of the centre row.
pub fn draw_line_chart<F>(width: u32, height: u32, thickness: u32, row_at: F) -> RgbImage
where
    F: Fn(u32) -> f64,
{
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    if height == 0 {
        return img;
    }
    let max_row = (height - 1) as f64;
    for col in 0..width {
        let centre = row_at(col).round().clamp(0.0, max_row) as u32;
        let top = centre.saturating_sub(thickness);
        let bottom = (centre + thickness).min(height - 1);
        for row in top..=bottom {
            img.put_pixel(col, row, LINE);
        }
    }
    img
}

/// Fraction of the way across the chart for `col`
fn progress(col: u32, width: u32) -> f64 {
    if width <= 1 {
        0.0
    } else {
        col as f64 / (width - 1) as f64
    }
}

/// A single flat line at `row`
pub fn flat_line(width: u32, height: u32, row: u32) -> RgbImage {
    draw_line_chart(width, height, 1, |_| row as f64)
}

/// A straight line from `start_row` (left edge) to `end_row` (right edge)
pub fn ramp(width: u32, height: u32, start_row: f64, end_row: f64) -> RgbImage {
    draw_line_chart(width, height, 1, |col| {
        start_row + (end_row - start_row) * progress(col, width)
    })
}

/// Flat line across the first 70% of the width, then a spike to `peak_row` in the
/// middle of the last 30% and back to `base_row` at the right edge.
pub fn reversal_tail(width: u32, height: u32, base_row: f64, peak_row: f64) -> RgbImage {
    draw_line_chart(width, height, 1, |col| {
        let t = progress(col, width);
        if t <= 0.7 {
            base_row
        } else {
            // Triangle over the tail: 0 at t=0.7, 1 at t=0.85, 0 at t=1.0
            let local = (t - 0.7) / 0.3;
            let tri = 1.0 - (2.0 * local - 1.0).abs();
            base_row + (peak_row - base_row) * tri
        }
    })
}

/// Saw-tooth line oscillating between `low_row` and `high_row` every `period` columns
pub fn zigzag(width: u32, height: u32, low_row: f64, high_row: f64, period: u32) -> RgbImage {
    let period = period.max(2);
    draw_line_chart(width, height, 1, |col| {
        let phase = (col % period) as f64 / period as f64;
        let tri = 1.0 - (2.0 * phase - 1.0).abs();
        low_row + (high_row - low_row) * tri
    })
}

/// No structure at all
pub fn uniform(width: u32, height: u32, colour: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_line_rows() {
        let img = flat_line(10, 20, 5);
        for col in 0..10 {
            assert_eq!(*img.get_pixel(col, 4), LINE);
            assert_eq!(*img.get_pixel(col, 5), LINE);
            assert_eq!(*img.get_pixel(col, 6), LINE);
            assert_eq!(*img.get_pixel(col, 3), BACKGROUND);
            assert_eq!(*img.get_pixel(col, 7), BACKGROUND);
        }
    }

    #[test]
    fn test_ramp_endpoints_clamped() {
        let img = ramp(5, 10, -50.0, 50.0);
        assert_eq!(*img.get_pixel(0, 0), LINE);
        assert_eq!(*img.get_pixel(4, 9), LINE);
    }

    #[test]
    fn test_single_column_chart() {
        let img = ramp(1, 8, 6.0, 1.0);
        assert_eq!(*img.get_pixel(0, 6), LINE);
    }
}
