use serde::{Deserialize, Serialize};

use crate::analysis::profile::{PriceLineLocator, price_line_profile};
use crate::config::TrendSettings;
use crate::domain::{GrayscaleGrid, TrendDirection};
use crate::utils::maths_utils::{linear_fit, mean, round_to};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Degrees, positive = visually rising. Rounded to 2 decimals.
    pub angle: f64,
    /// r² of the line fit scaled to 0..=100 (after the consistency penalty)
    pub confidence: u8,
    /// |mean(first points) - mean(last points)| in pixels
    pub consistency: f64,
}

/// Fits a line through the price-line positions of `slice_count` column slices.
///
/// Rows grow downwards, so a falling row index is a rising price and the angle
/// is negated. The slope is scaled by `height / width` so the angle reflects the
/// picture, not the slice index.
pub fn estimate_trend(
    grid: &GrayscaleGrid,
    locator: &dyn PriceLineLocator,
    settings: &TrendSettings,
) -> TrendResult {
    let (w, h) = grid.shape();
    let (w_f, h_f) = (w as f64, h as f64);

    let positions: Vec<f64> = price_line_profile(grid, locator, 0..w, settings.slice_count)
        .into_iter()
        .map(|p| p as f64)
        .collect();
    let xs: Vec<f64> = (0..positions.len()).map(|i| i as f64).collect();

    let (angle, mut confidence) = match linear_fit(&xs, &positions) {
        Some(fit) => {
            let angle = -(fit.slope * (h_f / w_f)).atan().to_degrees();
            let confidence = (fit.r_squared() * 100.0).round() as i32;
            if angle.is_finite() {
                (angle, confidence)
            } else {
                (0.0, 0)
            }
        }
        None => (0.0, 0),
    };

    let mut direction = if angle > settings.min_angle_deg && confidence > settings.min_confidence
    {
        TrendDirection::Bullish
    } else if angle < -settings.min_angle_deg && confidence > settings.min_confidence {
        TrendDirection::Bearish
    } else {
        TrendDirection::Lateral
    };

    // Start and end of the chart at (nearly) the same height => no real trend
    let k = settings.consistency_points.min(positions.len());
    let first_avg = mean(&positions[..k]);
    let last_avg = mean(&positions[positions.len() - k..]);
    let consistency = (first_avg - last_avg).abs();

    if consistency < h_f * settings.consistency_height_pct {
        direction = TrendDirection::Lateral;
        confidence = (confidence - settings.consistency_penalty).max(0);
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_estimator_details {
        log::info!(
            "trend: positions {:?} angle {:.2} confidence {} consistency {:.2} -> {}",
            positions,
            angle,
            confidence,
            consistency,
            direction
        );
    }

    TrendResult {
        direction,
        angle: round_to(angle, 2),
        confidence: confidence.clamp(0, 100) as u8,
        consistency,
    }
}
