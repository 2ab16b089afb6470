use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::profile::{PriceLineLocator, price_line_profile};
use crate::config::MomentumSettings;
use crate::domain::{GrayscaleGrid, MomentumDirection};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumResult {
    pub direction: MomentumDirection,
    pub strength: u8,
    /// Row change between the last two sections (pixels, negative = rising)
    pub recent_change: i64,
}

/// Short-term push, taken from the change between the last two of
/// `section_count` horizontal sections.
pub fn estimate_momentum(
    grid: &GrayscaleGrid,
    locator: &dyn PriceLineLocator,
    settings: &MomentumSettings,
) -> MomentumResult {
    let (w, h) = grid.shape();
    let h_f = h as f64;

    let positions = price_line_profile(grid, locator, 0..w, settings.section_count);
    let changes: Vec<i64> = positions
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| b as i64 - a as i64)
        .collect();
    let recent_change = changes.last().copied().unwrap_or(0);

    let momentum_value = recent_change as f64 * settings.recent_weight;
    let max_change = h_f * settings.max_change_height_pct;
    let normalized = if max_change > 0.0 {
        (momentum_value.abs() / max_change * 100.0).min(100.0)
    } else {
        0.0
    };

    let (direction, strength) = if momentum_value.abs() < h_f * settings.neutral_height_pct {
        (MomentumDirection::Neutral, settings.neutral_strength)
    } else if momentum_value < 0.0 {
        (MomentumDirection::Bullish, normalized as u8)
    } else {
        (MomentumDirection::Bearish, normalized as u8)
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_estimator_details {
        log::info!(
            "momentum: positions {:?} changes {:?} value {:.1} -> {} {}",
            positions,
            changes,
            momentum_value,
            direction,
            strength
        );
    }

    MomentumResult {
        direction,
        strength: strength.min(100),
        recent_change,
    }
}
