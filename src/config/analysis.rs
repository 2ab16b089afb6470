//! Analysis and classification configuration
//!
//! Every threshold the estimators use lives here. The values in [`ANALYSIS`]
//! are calibration constants tuned against real chart screenshots; change them
//! only together with the expected outputs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for the column-slice line fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendSettings {
    // Number of column slices the chart width is split into
    pub slice_count: usize,
    // Minimum absolute angle (degrees) before a direction is declared
    pub min_angle_deg: f64,
    // Confidence must be strictly above this for a directional trend
    pub min_confidence: i32,
    // How many leading/trailing positions are averaged for the consistency check
    pub consistency_points: usize,
    // First/last average closer than this fraction of height => lateral
    pub consistency_height_pct: f64,
    // Confidence removed when the consistency check forces lateral
    pub consistency_penalty: i32,
}

/// Settings for the dispersion based volatility score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilitySettings {
    // Combined dispersion that maps to a score of 100
    pub normaliser: f64,
    pub high_score: f64,
    pub medium_score: f64,
}

/// Settings for the four-section momentum estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumSettings {
    pub section_count: usize,
    // Multiplier applied to the most recent section change
    pub recent_weight: f64,
    // Fraction of height treated as a full-strength move
    pub max_change_height_pct: f64,
    // Moves below this fraction of height are neutral
    pub neutral_height_pct: f64,
    pub neutral_strength: u8,
}

/// Settings for the recent-candle window (rightmost part of the chart)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleSettings {
    // Window starts at this fraction of the width
    pub window_start: f64,
    pub movement_height_pct: f64,
    // Row-profile variance cutoffs (empirical, pixels²)
    pub high_variance: f64,
    pub consolidation_variance: f64,
}

/// Settings for the three-leg reversal check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalSettings {
    pub window_start: f64,
    // Both legs must move more than this fraction of height
    pub min_leg_height_pct: f64,
}

/// Hysteresis thresholds for the edge detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSettings {
    pub low_threshold: i32,
    pub high_threshold: i32,
}

/// Weights and bounds of the composite strength score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthSettings {
    pub confidence_weight: f64,
    pub volatility_weight: f64,
    pub momentum_weight: f64,
    pub consistency_weight: f64,

    // Candle consistency component values
    pub consolidating_value: f64,
    pub low_activity_value: f64,
    pub active_value: f64,

    pub reversal_penalty: f64,
    pub floor: f64,
    pub ceiling: f64,
}

/// Cutoffs for the market-state decision table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketStateSettings {
    // Below this strength everything is lateral
    pub min_trending_strength: f64,
    // Above this (with high volatility) the trend is "fuerte"
    pub strong_strength: f64,
}

/// The Master Analysis Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub trend: TrendSettings,
    pub volatility: VolatilitySettings,
    pub momentum: MomentumSettings,
    pub candles: CandleSettings,
    pub reversal: ReversalSettings,
    pub edges: EdgeSettings,
    pub strength: StrengthSettings,
    pub market_state: MarketStateSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    trend: TrendSettings {
        slice_count: 20,
        min_angle_deg: 5.0,
        min_confidence: 40,
        consistency_points: 5,
        consistency_height_pct: 0.05,
        consistency_penalty: 20,
    },

    volatility: VolatilitySettings {
        normaliser: 30.0,
        high_score: 65.0,
        medium_score: 35.0,
    },

    momentum: MomentumSettings {
        section_count: 4,
        recent_weight: 2.0,
        // Empirical: no documented derivation for 30% of height
        max_change_height_pct: 0.3,
        neutral_height_pct: 0.03,
        neutral_strength: 50,
    },

    candles: CandleSettings {
        window_start: 0.8,
        movement_height_pct: 0.05,
        // Empirical cutoffs, kept for output compatibility
        high_variance: 800.0,
        consolidation_variance: 300.0,
    },

    reversal: ReversalSettings {
        window_start: 0.7,
        min_leg_height_pct: 0.03,
    },

    edges: EdgeSettings {
        low_threshold: 50,
        high_threshold: 150,
    },

    strength: StrengthSettings {
        confidence_weight: 0.4,
        volatility_weight: 0.2,
        momentum_weight: 0.25,
        consistency_weight: 0.15,
        consolidating_value: 40.0,
        low_activity_value: 30.0,
        active_value: 60.0,
        reversal_penalty: 15.0,
        floor: 20.0,
        ceiling: 85.0,
    },

    market_state: MarketStateSettings {
        min_trending_strength: 55.0,
        strong_strength: 70.0,
    },
};

impl Default for AnalysisConfig {
    fn default() -> Self {
        ANALYSIS
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        ANALYSIS.trend
    }
}

impl Default for VolatilitySettings {
    fn default() -> Self {
        ANALYSIS.volatility
    }
}

impl Default for MomentumSettings {
    fn default() -> Self {
        ANALYSIS.momentum
    }
}

impl Default for CandleSettings {
    fn default() -> Self {
        ANALYSIS.candles
    }
}

impl Default for ReversalSettings {
    fn default() -> Self {
        ANALYSIS.reversal
    }
}

impl Default for EdgeSettings {
    fn default() -> Self {
        ANALYSIS.edges
    }
}

impl Default for StrengthSettings {
    fn default() -> Self {
        ANALYSIS.strength
    }
}

impl Default for MarketStateSettings {
    fn default() -> Self {
        ANALYSIS.market_state
    }
}

impl AnalysisConfig {
    /// Load overrides from a JSON file. Missing keys keep their [`ANALYSIS`] value.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
