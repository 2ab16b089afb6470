//! File naming and persistence configuration

/// Screenshot file names for the standard capture set
pub const M1_IMAGE: &str = "m1.png";
pub const M5_IMAGE: &str = "m5.png";
pub const M15_IMAGE: &str = "m15.png";

/// Default path of the append-only run log (one JSON object per line)
pub const RUN_LOG_PATH: &str = "signals.log";

/// Default output directory of the synthetic chart generator
pub const DEMO_CHART_DIR: &str = "demo_charts";

/// Timestamp layout used in the run log
pub const RUN_LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
