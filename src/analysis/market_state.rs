use crate::config::MarketStateSettings;
use crate::domain::{MarketState, RecentMovement, TrendDirection, VolatilityLevel};

/// Decision table over (direction, strength, recent movement, volatility).
///
/// Anything without a clear direction, with weak strength, or consolidating
/// right now is lateral. Otherwise high volatility splits a trend into
/// "fuerte" (strength above `strong_strength`) or "volátil".
pub fn classify_market_state(
    direction: TrendDirection,
    volatility: VolatilityLevel,
    movement: RecentMovement,
    strength: f64,
    settings: &MarketStateSettings,
) -> MarketState {
    if direction == TrendDirection::Lateral
        || strength < settings.min_trending_strength
        || movement == RecentMovement::Consolidating
    {
        return MarketState::Lateral;
    }

    let high_vol = volatility == VolatilityLevel::High;
    let strong = high_vol && strength > settings.strong_strength;

    match direction {
        TrendDirection::Bullish if strong => MarketState::StrongBullish,
        TrendDirection::Bullish if high_vol => MarketState::VolatileBullish,
        TrendDirection::Bullish => MarketState::Bullish,
        TrendDirection::Bearish if strong => MarketState::StrongBearish,
        TrendDirection::Bearish if high_vol => MarketState::VolatileBearish,
        TrendDirection::Bearish => MarketState::Bearish,
        // Unreachable: lateral returned early
        TrendDirection::Lateral => MarketState::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use strum::IntoEnumIterator;

    fn classify(
        direction: TrendDirection,
        volatility: VolatilityLevel,
        movement: RecentMovement,
        strength: f64,
    ) -> MarketState {
        classify_market_state(direction, volatility, movement, strength, &ANALYSIS.market_state)
    }

    #[test]
    fn test_lateral_gates() {
        use RecentMovement::*;
        use TrendDirection::*;
        use VolatilityLevel::*;
        assert_eq!(classify(Lateral, High, Rising, 85.0), MarketState::Lateral);
        assert_eq!(classify(Bullish, High, Rising, 54.99), MarketState::Lateral);
        assert_eq!(classify(Bearish, High, Consolidating, 85.0), MarketState::Lateral);
    }

    #[test]
    fn test_bullish_branches() {
        use RecentMovement::*;
        use TrendDirection::*;
        use VolatilityLevel::*;
        assert_eq!(classify(Bullish, High, Rising, 71.0), MarketState::StrongBullish);
        assert_eq!(classify(Bullish, High, Falling, 70.0), MarketState::VolatileBullish);
        assert_eq!(classify(Bullish, Medium, Rising, 80.0), MarketState::Bullish);
        assert_eq!(classify(Bullish, Low, Rising, 55.0), MarketState::Bullish);
    }

    #[test]
    fn test_bearish_branches() {
        use RecentMovement::*;
        use TrendDirection::*;
        use VolatilityLevel::*;
        assert_eq!(classify(Bearish, High, Falling, 85.0), MarketState::StrongBearish);
        assert_eq!(classify(Bearish, High, Falling, 60.0), MarketState::VolatileBearish);
        assert_eq!(classify(Bearish, Low, Rising, 60.0), MarketState::Bearish);
    }

    #[test]
    fn test_never_undefined() {
        for d in TrendDirection::iter() {
            for v in VolatilityLevel::iter() {
                for m in RecentMovement::iter() {
                    for s in [20.0, 54.9, 55.0, 70.0, 70.1, 85.0] {
                        assert_ne!(classify(d, v, m, s), MarketState::Undefined);
                    }
                }
            }
        }
    }
}
