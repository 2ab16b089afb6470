//! Column-slice projections shared by every estimator.
//!
//! A "price-line position" is the row a [`PriceLineLocator`] picks out of the
//! per-row means of a column slice.

use std::ops::Range;

use crate::domain::GrayscaleGrid;
use crate::utils::maths_utils::{argmax_index, argmin_index};

/// Maps a column slice of the grid to the row where the price line sits.
pub trait PriceLineLocator: Send + Sync {
    fn locate(&self, grid: &GrayscaleGrid, columns: Range<usize>) -> usize;
}

/// Dark line on a light background: the row of minimum mean luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkestRow;

impl PriceLineLocator for DarkestRow {
    fn locate(&self, grid: &GrayscaleGrid, columns: Range<usize>) -> usize {
        argmin_index(&grid.row_means(columns))
    }
}

/// Light line on a dark background: the row of maximum mean luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrightestRow;

impl PriceLineLocator for BrightestRow {
    fn locate(&self, grid: &GrayscaleGrid, columns: Range<usize>) -> usize {
        argmax_index(&grid.row_means(columns))
    }
}

/// Chart colour scheme, selects the locator
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

impl ChartTheme {
    pub fn locator(self) -> Box<dyn PriceLineLocator> {
        match self {
            ChartTheme::Light => Box::new(DarkestRow),
            ChartTheme::Dark => Box::new(BrightestRow),
        }
    }
}

/// Splits `columns` into `count` contiguous slices of `width / count` columns,
/// the last one absorbing the remainder.
///
/// If the range is narrower than `count`, the count drops to the width so no
/// slice is ever empty. An empty range yields no slices.
pub fn column_slices(columns: Range<usize>, count: usize) -> Vec<Range<usize>> {
    let width = columns.end.saturating_sub(columns.start);
    let count = count.min(width);
    if count == 0 {
        return Vec::new();
    }

    let slice_width = width / count;
    (0..count)
        .map(|i| {
            let start = columns.start + i * slice_width;
            let end = if i + 1 < count {
                start + slice_width
            } else {
                columns.end
            };
            start..end
        })
        .collect()
}

/// Price-line position of each slice of `columns`
pub fn price_line_profile(
    grid: &GrayscaleGrid,
    locator: &dyn PriceLineLocator,
    columns: Range<usize>,
    count: usize,
) -> Vec<usize> {
    column_slices(columns, count)
        .into_iter()
        .map(|slice| locator.locate(grid, slice))
        .collect()
}

/// First column of the trailing window that starts at `fraction` of the width.
/// Always leaves at least one column.
pub fn window_start(width: usize, fraction: f64) -> usize {
    let start = (width as f64 * fraction) as usize;
    start.min(width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_absorb_remainder() {
        let slices = column_slices(0..103, 20);
        assert_eq!(slices.len(), 20);
        assert_eq!(slices[0], 0..5);
        assert_eq!(slices[18], 90..95);
        assert_eq!(slices[19], 95..103);
    }

    #[test]
    fn test_slices_with_offset() {
        let slices = column_slices(70..100, 3);
        assert_eq!(slices, vec![70..80, 80..90, 90..100]);
    }

    #[test]
    fn test_narrow_range_degrades_count() {
        assert_eq!(column_slices(0..3, 20), vec![0..1, 1..2, 2..3]);
        assert_eq!(column_slices(4..5, 2), vec![4..5]);
        assert!(column_slices(5..5, 4).is_empty());
    }

    #[test]
    fn test_locators_pick_extremes() {
        // Rows: bright, dark, mid
        let grid = GrayscaleGrid::from_luma(2, 3, vec![200, 200, 10, 10, 100, 100]).unwrap();
        assert_eq!(DarkestRow.locate(&grid, 0..2), 1);
        assert_eq!(BrightestRow.locate(&grid, 0..2), 0);
        assert_eq!(ChartTheme::Dark.locator().locate(&grid, 0..1), 0);
    }

    #[test]
    fn test_profile_per_slice() {
        // Dark pixel moves up one row per column
        #[rustfmt::skip]
        let pixels = vec![
            255, 255, 0,
            255, 0,   255,
            0,   255, 255,
        ];
        let grid = GrayscaleGrid::from_luma(3, 3, pixels).unwrap();
        assert_eq!(price_line_profile(&grid, &DarkestRow, 0..3, 3), vec![2, 1, 0]);
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(100, 0.8), 80);
        assert_eq!(window_start(1, 0.8), 0);
        assert_eq!(window_start(2, 0.7), 1);
    }
}
