use serde::{Deserialize, Serialize};

use crate::analysis::edge_density::EdgeDensity;
use crate::analysis::momentum::MomentumResult;
use crate::analysis::recent_candles::CandleResult;
use crate::analysis::reversal::ReversalResult;
use crate::analysis::trend::TrendResult;
use crate::analysis::volatility::VolatilityResult;
use crate::domain::{
    CandlePattern, MarketState, MomentumDirection, RecentMovement, TrendDirection, VolatilityLevel,
};

/// Flat, serialisable result of one chart analysis.
///
/// Field names and label strings are the interchange format read by the signal
/// layer; keep them stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    // Headline
    pub trend: TrendDirection,
    pub strength: f64,
    pub norm_pct: f64,

    // Detail
    pub trend_angle: f64,
    pub trend_confidence: u8,
    pub volatility: VolatilityLevel,
    pub volatility_score: f64,
    pub momentum: MomentumDirection,
    pub momentum_strength: u8,

    // Patterns
    pub candle_pattern: CandlePattern,
    pub recent_movement: RecentMovement,
    pub reversal_detected: bool,

    // Market state
    pub market_state: MarketState,
    pub is_trending: bool,

    // Metadata
    pub edge_strength: f64,
    /// (width, height)
    pub shape: (usize, usize),
}

/// Every sub-result of an analysis, including the intermediate values the flat
/// record leaves out (trend consistency, momentum change, candle variance,
/// reversal strength, edge pixel count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub trend: TrendResult,
    pub volatility: VolatilityResult,
    pub momentum: MomentumResult,
    pub candles: CandleResult,
    pub reversal: ReversalResult,
    pub edges: EdgeDensity,
    pub strength: f64,
    pub market_state: MarketState,
    pub shape: (usize, usize),
}

impl ChartAnalysis {
    pub fn record(&self) -> AnalysisRecord {
        AnalysisRecord {
            trend: self.trend.direction,
            strength: self.strength,
            norm_pct: self.edges.norm_pct,
            trend_angle: self.trend.angle,
            trend_confidence: self.trend.confidence,
            volatility: self.volatility.level,
            volatility_score: self.volatility.score,
            momentum: self.momentum.direction,
            momentum_strength: self.momentum.strength,
            candle_pattern: self.candles.pattern,
            recent_movement: self.candles.movement,
            reversal_detected: self.reversal.detected,
            market_state: self.market_state,
            is_trending: self.market_state.is_trending(),
            edge_strength: self.edges.edge_strength,
            shape: self.shape,
        }
    }
}

impl From<&ChartAnalysis> for AnalysisRecord {
    fn from(analysis: &ChartAnalysis) -> Self {
        analysis.record()
    }
}
