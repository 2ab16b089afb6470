use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use chart_scan::analysis::{
    analyze_captures, analyze_timeframes, default_capture_set, label_captures,
};
use chart_scan::ui::render_report;
use chart_scan::{AnalysisConfig, ChartAnalysis, ChartAnalyzer, Cli, RunLogEntry};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the analyzer
    let config = match &args.config {
        Some(path) => AnalysisConfig::load_from_path(path)
            .with_context(|| format!("Failed to load analysis config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let analyzer = ChartAnalyzer::new(config).with_theme(args.theme);

    // D. Analyse (in parallel)
    let outcomes: Vec<(String, PathBuf, Result<ChartAnalysis, _>)> = if args.images.is_empty() {
        let captures: Vec<_> = default_capture_set(&args.dir)
            .into_iter()
            .filter(|(timeframe, path)| {
                let exists = path.is_file();
                if !exists {
                    log::warn!("⚠️  No {} capture at {}, skipping", timeframe, path.display());
                }
                exists
            })
            .collect();
        analyze_timeframes(&analyzer, &captures)
            .into_iter()
            .map(|o| (o.label.to_string(), o.path, o.result))
            .collect()
    } else {
        let captures = label_captures(&args.images);
        analyze_captures(&analyzer, &captures)
            .into_iter()
            .map(|o| (o.label, o.path, o.result))
            .collect()
    };

    // E. Report
    // Labels are unique, input order is kept
    let mut analyses: Vec<(String, ChartAnalysis)> = Vec::new();
    for (label, path, result) in outcomes {
        match result {
            Ok(analysis) => analyses.push((label, analysis)),
            Err(e) => log::error!("❌ {}: {}", path.display(), e),
        }
    }

    if analyses.is_empty() {
        bail!("No chart could be analysed");
    }

    if args.report {
        for (label, analysis) in &analyses {
            print!("{}", render_report(label, &analysis.record()));
        }
    } else if args.details {
        let details: BTreeMap<_, _> = analyses.iter().map(|(k, v)| (k, v)).collect();
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        let records: BTreeMap<_, _> = analyses.iter().map(|(k, v)| (k, v.record())).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    // F. Persist the run
    if let Some(log_path) = &args.log_file {
        let details = analyses
            .iter()
            .map(|(label, analysis)| (label.clone(), analysis.record()))
            .collect();
        RunLogEntry::new(details).append_to_path(log_path)?;
        log::info!("💾 {} records appended to {}", analyses.len(), log_path.display());
    }

    Ok(())
}
