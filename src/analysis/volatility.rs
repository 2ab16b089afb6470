use serde::{Deserialize, Serialize};

use crate::config::VolatilitySettings;
use crate::domain::{GrayscaleGrid, VolatilityLevel};
use crate::utils::maths_utils::{first_differences, mean, population_std, round_to};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    pub level: VolatilityLevel,
    /// 0..=100, rounded to 2 decimals
    pub score: f64,
}

/// Average of two dispersion measures: the mean per-row standard deviation, and
/// the standard deviation of consecutive column-mean differences (horizontal churn).
pub fn estimate_volatility(grid: &GrayscaleGrid, settings: &VolatilitySettings) -> VolatilityResult {
    let row_stds: Vec<f64> = grid
        .rows()
        .map(|row| {
            let values: Vec<f64> = row.iter().map(|&v| v as f64).collect();
            population_std(&values)
        })
        .collect();
    let mean_row_std = mean(&row_stds);

    let col_diffs = first_differences(&grid.column_means());
    let col_diff_std = population_std(&col_diffs);

    let combined = (mean_row_std + col_diff_std) / 2.0;
    let score = (combined / settings.normaliser * 100.0).min(100.0);

    let level = if score > settings.high_score {
        VolatilityLevel::High
    } else if score > settings.medium_score {
        VolatilityLevel::Medium
    } else {
        VolatilityLevel::Low
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_estimator_details {
        log::info!(
            "volatility: mean row std {:.3} col diff std {:.3} -> score {:.2} ({})",
            mean_row_std,
            col_diff_std,
            score,
            level
        );
    }

    VolatilityResult {
        level,
        score: round_to(score, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::data::synthetic;
    use image::Rgb;

    fn volatility_of(img: &image::RgbImage) -> VolatilityResult {
        let grid = GrayscaleGrid::from_rgb(img).unwrap();
        estimate_volatility(&grid, &ANALYSIS.volatility)
    }

    #[test]
    fn test_uniform_image_scores_zero() {
        let result = volatility_of(&synthetic::uniform(120, 80, Rgb([90, 120, 200])));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.level, VolatilityLevel::Low);
    }

    #[test]
    fn test_flat_line_has_no_row_dispersion() {
        // Every row is constant and every column identical
        let result = volatility_of(&synthetic::flat_line(120, 80, 40));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_vertical_stripes_saturate() {
        // Alternating black/white columns: row std 127.5, column churn huge
        let grid = GrayscaleGrid::from_luma(
            6,
            2,
            vec![0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255],
        )
        .unwrap();
        let result = estimate_volatility(&grid, &ANALYSIS.volatility);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.level, VolatilityLevel::High);
    }

    #[test]
    fn test_medium_band() {
        // Single row [0, 60]: row std 30, one column diff (std 0) -> combined 15 -> score 50
        let grid = GrayscaleGrid::from_luma(2, 1, vec![0, 60]).unwrap();
        let result = estimate_volatility(&grid, &ANALYSIS.volatility);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.level, VolatilityLevel::Medium);
    }

    #[test]
    fn test_single_pixel() {
        let grid = GrayscaleGrid::from_luma(1, 1, vec![42]).unwrap();
        let result = estimate_volatility(&grid, &ANALYSIS.volatility);
        assert_eq!(result.score, 0.0);
    }
}
