use std::path::Path;

use crate::analysis::edge_density::measure_edge_density;
use crate::analysis::market_state::classify_market_state;
use crate::analysis::momentum::estimate_momentum;
use crate::analysis::profile::{ChartTheme, DarkestRow, PriceLineLocator};
use crate::analysis::recent_candles::analyze_recent_candles;
use crate::analysis::reversal::detect_reversal;
use crate::analysis::strength::calibrated_strength;
use crate::analysis::trend::estimate_trend;
use crate::analysis::volatility::estimate_volatility;
use crate::config::AnalysisConfig;
use crate::data::{ChartImageError, decode_grid, load_grid};
use crate::domain::GrayscaleGrid;
use crate::models::{AnalysisRecord, ChartAnalysis};

/// Runs the full estimator pipeline over a chart screenshot.
///
/// Holds only immutable configuration, so one analyzer can be shared across
/// threads and reused for any number of images.
pub struct ChartAnalyzer {
    config: AnalysisConfig,
    locator: Box<dyn PriceLineLocator>,
}

impl Default for ChartAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl ChartAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            locator: Box::new(DarkestRow),
        }
    }

    /// Swap the price-line strategy (e.g. for dark-theme charts)
    pub fn with_locator(mut self, locator: Box<dyn PriceLineLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_theme(self, theme: ChartTheme) -> Self {
        self.with_locator(theme.locator())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisRecord, ChartImageError> {
        Ok(self.analyze_path_full(path)?.record())
    }

    /// Like [`Self::analyze_path`] but keeps every sub-result
    pub fn analyze_path_full(&self, path: &Path) -> Result<ChartAnalysis, ChartImageError> {
        let grid = load_grid(path)?;
        log::debug!("Analysing {} ({}x{})", path.display(), grid.width(), grid.height());
        Ok(self.analyze_grid(&grid))
    }

    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisRecord, ChartImageError> {
        let grid = decode_grid(bytes)?;
        Ok(self.analyze_grid(&grid).record())
    }

    /// Every estimator reads the same grid; none depends on another's output
    /// until the strength/market-state stage.
    pub fn analyze_grid(&self, grid: &GrayscaleGrid) -> ChartAnalysis {
        let config = &self.config;
        let locator = self.locator.as_ref();

        let trend = estimate_trend(grid, locator, &config.trend);
        let volatility = estimate_volatility(grid, &config.volatility);
        let momentum = estimate_momentum(grid, locator, &config.momentum);
        let candles = analyze_recent_candles(grid, locator, &config.candles);
        let reversal = detect_reversal(grid, locator, &config.reversal);
        let edges = measure_edge_density(grid, &config.edges);

        let strength = calibrated_strength(
            &trend,
            &volatility,
            &momentum,
            &candles,
            &reversal,
            &config.strength,
        );
        let market_state = classify_market_state(
            trend.direction,
            volatility.level,
            candles.movement,
            strength,
            &config.market_state,
        );

        log::debug!(
            "trend {} ({}°, {}%) volatility {} momentum {} strength {} -> {}",
            trend.direction,
            trend.angle,
            trend.confidence,
            volatility.level,
            momentum.direction,
            strength,
            market_state
        );

        ChartAnalysis {
            trend,
            volatility,
            momentum,
            candles,
            reversal,
            edges,
            strength,
            market_state,
            shape: grid.shape(),
        }
    }
}

/// Analyse the chart at `path` with the default configuration
pub fn analyze_image(path: &Path) -> Result<AnalysisRecord, ChartImageError> {
    ChartAnalyzer::default().analyze_path(path)
}
