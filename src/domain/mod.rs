// Domain types and value objects
pub mod grayscale;
pub mod signals;
pub mod timeframe;

// Re-export commonly used types
pub use grayscale::GrayscaleGrid;
pub use signals::{
    CandlePattern, MarketState, MomentumDirection, RecentMovement, TrendDirection, VolatilityLevel,
};
pub use timeframe::Timeframe;
