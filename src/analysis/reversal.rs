use serde::{Deserialize, Serialize};

use crate::analysis::profile::{PriceLineLocator, price_line_profile, window_start};
use crate::config::ReversalSettings;
use crate::domain::GrayscaleGrid;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalResult {
    pub detected: bool,
    /// |leg2 - leg1| in pixels, 0 when not detected
    pub strength: u32,
}

impl ReversalResult {
    pub const NONE: ReversalResult = ReversalResult {
        detected: false,
        strength: 0,
    };
}

/// Splits the trailing window into three parts and flags a reversal when the two
/// legs between them point in opposite directions and both are large enough.
pub fn detect_reversal(
    grid: &GrayscaleGrid,
    locator: &dyn PriceLineLocator,
    settings: &ReversalSettings,
) -> ReversalResult {
    let (w, h) = grid.shape();
    let window = window_start(w, settings.window_start)..w;

    let positions = price_line_profile(grid, locator, window, 3);
    let [pos1, pos2, pos3] = match positions.as_slice() {
        &[a, b, c] => [a as i64, b as i64, c as i64],
        _ => return ReversalResult::NONE,
    };

    let leg1 = pos2 - pos1;
    let leg2 = pos3 - pos2;
    let min_leg = h as f64 * settings.min_leg_height_pct;

    let opposite = (leg1 > 0 && leg2 < 0) || (leg1 < 0 && leg2 > 0);
    let detected = opposite && leg1.abs() as f64 > min_leg && leg2.abs() as f64 > min_leg;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_estimator_details {
        log::info!(
            "reversal: positions [{}, {}, {}] legs {} / {} -> {}",
            pos1,
            pos2,
            pos3,
            leg1,
            leg2,
            detected
        );
    }

    if detected {
        ReversalResult {
            detected,
            strength: (leg2 - leg1).unsigned_abs() as u32,
        }
    } else {
        ReversalResult::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profile::DarkestRow;
    use crate::config::ANALYSIS;
    use crate::data::synthetic;
    use image::{Rgb, RgbImage, imageops};

    /// Three flat legs over the last 30% of a 300x100 chart (window 210..300, thirds of 30)
    fn three_legs(a: f64, b: f64, c: f64) -> RgbImage {
        synthetic::draw_line_chart(300, 100, 1, |col| match col {
            0..240 => a,
            240..270 => b,
            _ => c,
        })
    }

    fn reversal_of(img: &RgbImage) -> ReversalResult {
        let grid = GrayscaleGrid::from_rgb(img).unwrap();
        detect_reversal(&grid, &DarkestRow, &ANALYSIS.reversal)
    }

    #[test]
    fn test_peak_is_reversal() {
        // Rows 50 -> 20 -> 50: legs -30, +30
        let result = reversal_of(&three_legs(50.0, 20.0, 50.0));
        assert!(result.detected);
        assert_eq!(result.strength, 60);
    }

    #[test]
    fn test_continuation_is_not_reversal() {
        let result = reversal_of(&three_legs(80.0, 50.0, 20.0));
        assert_eq!(result, ReversalResult::NONE);
    }

    #[test]
    fn test_small_leg_never_signals() {
        // Second leg is only 2 px (< 3% of 100)
        let result = reversal_of(&three_legs(50.0, 20.0, 22.0));
        assert!(!result.detected);
        assert_eq!(result.strength, 0);
    }

    #[test]
    fn test_mirrored_window_keeps_detection() {
        let img = three_legs(60.0, 25.0, 60.0);
        let original = reversal_of(&img);
        assert!(original.detected);

        // Mirror only the trailing window left-to-right
        let mut mirrored = img.clone();
        let window = imageops::crop_imm(&img, 210, 0, 90, 100).to_image();
        imageops::replace(&mut mirrored, &imageops::flip_horizontal(&window), 210, 0);
        let flipped = reversal_of(&mirrored);
        assert!(flipped.detected);
        assert_eq!(flipped.strength, original.strength);
    }

    #[test]
    fn test_uniform_and_narrow_images() {
        assert_eq!(reversal_of(&synthetic::uniform(300, 100, Rgb([255, 255, 255]))), ReversalResult::NONE);
        for w in 1..=5 {
            assert!(!reversal_of(&synthetic::uniform(w, 10, Rgb([0, 0, 0]))).detected);
        }
    }

    #[test]
    fn test_synthetic_reversal_tail() {
        let result = reversal_of(&synthetic::reversal_tail(300, 100, 70.0, 20.0));
        assert!(result.detected);
    }
}
