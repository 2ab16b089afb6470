//! Configuration module for the chart scanner.

pub mod analysis;

mod debug; // Private: callers use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AnalysisConfig, CandleSettings, EdgeSettings, MarketStateSettings, MomentumSettings,
    ReversalSettings, StrengthSettings, TrendSettings, VolatilitySettings,
};
pub use persistence::{
    DEMO_CHART_DIR, M1_IMAGE, M5_IMAGE, M15_IMAGE, RUN_LOG_PATH, RUN_LOG_TIMESTAMP_FORMAT,
};
