#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ChartAnalyzer, ChartTheme, analyze_image, analyze_timeframes};
pub use config::{ANALYSIS, AnalysisConfig};
pub use data::{ChartImageError, RunLogEntry};
pub use domain::{GrayscaleGrid, Timeframe};
pub use models::{AnalysisRecord, ChartAnalysis};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Chart screenshots to analyse. Defaults to m1.png, m5.png and m15.png in --dir
    pub images: Vec<PathBuf>,

    /// Directory searched for the default capture set
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Print a human-readable diagnostic instead of JSON
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Emit every sub-result, not just the flat record
    #[arg(long, default_value_t = false)]
    pub details: bool,

    /// Chart colour scheme (light = dark line on light background)
    #[arg(long, value_enum, default_value_t = ChartTheme::Light)]
    pub theme: ChartTheme,

    /// JSON file overriding analysis thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Append the run's records to a JSON-lines log (signals.log when no path is given)
    #[arg(long, num_args = 0..=1, default_missing_value = config::RUN_LOG_PATH)]
    pub log_file: Option<PathBuf>,
}
