use crate::analysis::momentum::MomentumResult;
use crate::analysis::recent_candles::CandleResult;
use crate::analysis::reversal::ReversalResult;
use crate::analysis::trend::TrendResult;
use crate::analysis::volatility::VolatilityResult;
use crate::config::StrengthSettings;
use crate::domain::{CandlePattern, RecentMovement};
use crate::utils::maths_utils::round_to;

/// Value the recent-candle behaviour contributes before weighting
pub fn candle_consistency(candles: &CandleResult, settings: &StrengthSettings) -> f64 {
    if candles.movement == RecentMovement::Consolidating {
        settings.consolidating_value
    } else if candles.pattern == CandlePattern::LowActivity {
        settings.low_activity_value
    } else {
        settings.active_value
    }
}

/// Weighted composite of the estimator outputs, clamped to `[floor, ceiling]`
/// and rounded to 2 decimals. A heuristic never reports near-certainty or near-zero.
pub fn calibrated_strength(
    trend: &TrendResult,
    volatility: &VolatilityResult,
    momentum: &MomentumResult,
    candles: &CandleResult,
    reversal: &ReversalResult,
    settings: &StrengthSettings,
) -> f64 {
    let penalty = if reversal.detected {
        settings.reversal_penalty
    } else {
        0.0
    };

    let total = trend.confidence as f64 * settings.confidence_weight
        + volatility.score * settings.volatility_weight
        + momentum.strength as f64 * settings.momentum_weight
        + candle_consistency(candles, settings) * settings.consistency_weight
        - penalty;

    round_to(total.clamp(settings.floor, settings.ceiling), 2)
}
