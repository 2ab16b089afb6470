use serde::{Deserialize, Serialize};

use crate::analysis::profile::{PriceLineLocator, column_slices, window_start};
use crate::config::CandleSettings;
use crate::domain::{CandlePattern, GrayscaleGrid, RecentMovement};
use crate::utils::maths_utils::population_variance;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleResult {
    pub pattern: CandlePattern,
    pub movement: RecentMovement,
    /// Variance of the row-mean profile over the window (pixels²)
    pub variance: f64,
}

/// Looks only at the rightmost part of the chart (from `window_start` of the width).
///
/// Pattern comes from the vertical variance of the window; movement from the
/// price-line positions of its left and right halves. The two are independent.
pub fn analyze_recent_candles(
    grid: &GrayscaleGrid,
    locator: &dyn PriceLineLocator,
    settings: &CandleSettings,
) -> CandleResult {
    let (w, h) = grid.shape();
    let window = window_start(w, settings.window_start)..w;

    let variance = population_variance(&grid.row_means(window.clone()));

    // A one-column window has no halves; both sides then read the same column.
    let halves = column_slices(window, 2);
    let (left_pos, right_pos) = match (halves.first(), halves.last()) {
        (Some(left), Some(right)) => (
            locator.locate(grid, left.clone()) as i64,
            locator.locate(grid, right.clone()) as i64,
        ),
        _ => (0, 0),
    };
    let movement_diff = left_pos - right_pos;

    let movement = if (movement_diff.abs() as f64) < h as f64 * settings.movement_height_pct {
        RecentMovement::Consolidating
    } else if movement_diff < 0 {
        RecentMovement::Rising
    } else {
        RecentMovement::Falling
    };

    let pattern = if variance > settings.high_variance {
        CandlePattern::HighVolatility
    } else if variance > settings.consolidation_variance {
        CandlePattern::Consolidation
    } else {
        CandlePattern::LowActivity
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_estimator_details {
        log::info!(
            "candles: left {} right {} variance {:.1} -> {} / {}",
            left_pos,
            right_pos,
            variance,
            pattern,
            movement
        );
    }

    CandleResult {
        pattern,
        movement,
        variance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profile::DarkestRow;
    use crate::config::ANALYSIS;
    use crate::data::synthetic;

    fn candles_of(img: &image::RgbImage) -> CandleResult {
        let grid = GrayscaleGrid::from_rgb(img).unwrap();
        analyze_recent_candles(&grid, &DarkestRow, &ANALYSIS.candles)
    }

    #[test]
    fn test_flat_tail_consolidates() {
        let result = candles_of(&synthetic::flat_line(200, 100, 50));
        assert_eq!(result.movement, RecentMovement::Consolidating);
    }

    #[test]
    fn test_row_label_follows_row_index_sign() {
        // Window is cols 160..200; halves 160..180 and 180..200.
        // Line sits higher (smaller row) on the left half than the right half.
        let img = synthetic::draw_line_chart(200, 100, 1, |col| if col < 180 { 20.0 } else { 80.0 });
        let result = candles_of(&img);
        assert_eq!(result.movement, RecentMovement::Rising);

        let img = synthetic::draw_line_chart(200, 100, 1, |col| if col < 180 { 80.0 } else { 20.0 });
        let result = candles_of(&img);
        assert_eq!(result.movement, RecentMovement::Falling);
    }

    #[test]
    fn test_pattern_thresholds() {
        // Uniform image: zero variance
        let flat = GrayscaleGrid::from_luma(10, 4, vec![128; 40]).unwrap();
        let result = analyze_recent_candles(&flat, &DarkestRow, &ANALYSIS.candles);
        assert_eq!(result.variance, 0.0);
        assert_eq!(result.pattern, CandlePattern::LowActivity);

        // Two rows 0 and 60: variance 900
        let mut pixels = vec![0u8; 10];
        pixels.extend(vec![60u8; 10]);
        let grid = GrayscaleGrid::from_luma(10, 2, pixels).unwrap();
        let result = analyze_recent_candles(&grid, &DarkestRow, &ANALYSIS.candles);
        assert_eq!(result.variance, 900.0);
        assert_eq!(result.pattern, CandlePattern::HighVolatility);

        // Two rows 0 and 40: variance 400
        let mut pixels = vec![0u8; 10];
        pixels.extend(vec![40u8; 10]);
        let grid = GrayscaleGrid::from_luma(10, 2, pixels).unwrap();
        let result = analyze_recent_candles(&grid, &DarkestRow, &ANALYSIS.candles);
        assert_eq!(result.pattern, CandlePattern::Consolidation);
    }

    #[test]
    fn test_single_column_window() {
        let result = candles_of(&synthetic::ramp(1, 30, 25.0, 5.0));
        assert_eq!(result.movement, RecentMovement::Consolidating);
    }
}
