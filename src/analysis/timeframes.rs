use std::path::{Path, PathBuf};

use itertools::Itertools;
use rayon::prelude::*;
use strum::IntoEnumIterator;

use crate::analysis::chart_analyzer::ChartAnalyzer;
use crate::data::ChartImageError;
use crate::domain::Timeframe;
use crate::models::ChartAnalysis;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// Outcome for one labelled capture
#[derive(Debug)]
pub struct CaptureOutcome<L> {
    pub label: L,
    pub path: PathBuf,
    pub result: Result<ChartAnalysis, ChartImageError>,
}

pub type TimeframeOutcome = CaptureOutcome<Timeframe>;

/// Standard capture set (`m1.png`, `m5.png`, `m15.png`) inside `dir`
pub fn default_capture_set(dir: &Path) -> Vec<(Timeframe, PathBuf)> {
    Timeframe::iter()
        .map(|tf| (tf, dir.join(tf.default_file_name())))
        .collect()
}

/// Labels explicit image paths by file name. Paths whose file names clash
/// are labelled by their full path instead, so every label is unique.
pub fn label_captures(paths: &[PathBuf]) -> Vec<(String, PathBuf)> {
    let names: Vec<String> = paths.iter().map(|p| file_label(p)).collect();
    let counts = names.iter().counts();
    names
        .iter()
        .zip(paths)
        .map(|(name, path)| {
            let label = if counts.get(name).copied().unwrap_or(0) > 1 {
                path.display().to_string()
            } else {
                name.clone()
            };
            (label, path.clone())
        })
        .collect()
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Analyse every capture in parallel. Each analysis owns its grid, so there is
/// nothing to coordinate. Output keeps the input order.
pub fn analyze_captures<L>(
    analyzer: &ChartAnalyzer,
    captures: &[(L, PathBuf)],
) -> Vec<CaptureOutcome<L>>
where
    L: Clone + Send + Sync + std::fmt::Display,
{
    captures
        .par_iter()
        .map(|(label, path)| {
            #[cfg(debug_assertions)]
            let start_time = std::time::Instant::now();

            let result = analyzer.analyze_path_full(path);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_timeframe_timing {
                log::info!("{} analysed in {:?}", label, start_time.elapsed());
            }

            CaptureOutcome {
                label: label.clone(),
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// Same as [`analyze_captures`], sorted by timeframe
pub fn analyze_timeframes(
    analyzer: &ChartAnalyzer,
    captures: &[(Timeframe, PathBuf)],
) -> Vec<TimeframeOutcome> {
    let mut outcomes = analyze_captures(analyzer, captures);
    outcomes.sort_by_key(|o| o.label);
    outcomes
}
