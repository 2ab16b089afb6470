// Feature extraction and rule-based classification of chart screenshots
pub mod chart_analyzer;
pub mod edge_density;
pub mod market_state;
pub mod momentum;
pub mod profile;
pub mod recent_candles;
pub mod reversal;
pub mod strength;
pub mod timeframes;
pub mod trend;
pub mod volatility;

// Re-export commonly used types
pub use chart_analyzer::{ChartAnalyzer, analyze_image};
pub use profile::{BrightestRow, ChartTheme, DarkestRow, PriceLineLocator};
pub use timeframes::{
    CaptureOutcome, TimeframeOutcome, analyze_captures, analyze_timeframes, default_capture_set,
    label_captures,
};
