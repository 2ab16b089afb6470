//! Categorical labels produced by the estimators.
//!
//! The string forms (serde and `Display`) are the public interchange values
//! read by downstream consumers; do not rename them.

use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum TrendDirection {
    #[serde(rename = "alcista")]
    #[strum(serialize = "alcista")]
    Bullish,
    #[serde(rename = "bajista")]
    #[strum(serialize = "bajista")]
    Bearish,
    #[default]
    #[serde(rename = "lateral")]
    #[strum(serialize = "lateral")]
    Lateral,
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum VolatilityLevel {
    #[serde(rename = "alta")]
    #[strum(serialize = "alta")]
    High,
    #[serde(rename = "media")]
    #[strum(serialize = "media")]
    Medium,
    #[serde(rename = "baja")]
    #[strum(serialize = "baja")]
    Low,
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum MomentumDirection {
    #[serde(rename = "alcista")]
    #[strum(serialize = "alcista")]
    Bullish,
    #[serde(rename = "bajista")]
    #[strum(serialize = "bajista")]
    Bearish,
    #[serde(rename = "neutral")]
    #[strum(serialize = "neutral")]
    Neutral,
}

/// Activity level of the recent-candle window
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum CandlePattern {
    #[serde(rename = "alta_volatilidad")]
    #[strum(serialize = "alta_volatilidad")]
    HighVolatility,
    #[serde(rename = "consolidación")]
    #[strum(serialize = "consolidación")]
    Consolidation,
    #[serde(rename = "baja_actividad")]
    #[strum(serialize = "baja_actividad")]
    LowActivity,
}

/// Direction of the last few candles
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum RecentMovement {
    #[serde(rename = "subiendo")]
    #[strum(serialize = "subiendo")]
    Rising,
    #[serde(rename = "bajando")]
    #[strum(serialize = "bajando")]
    Falling,
    #[serde(rename = "consolidando")]
    #[strum(serialize = "consolidando")]
    Consolidating,
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum MarketState {
    #[serde(rename = "lateral")]
    #[strum(serialize = "lateral")]
    Lateral,
    #[serde(rename = "alcista")]
    #[strum(serialize = "alcista")]
    Bullish,
    #[serde(rename = "alcista_fuerte")]
    #[strum(serialize = "alcista_fuerte")]
    StrongBullish,
    #[serde(rename = "alcista_volátil")]
    #[strum(serialize = "alcista_volátil")]
    VolatileBullish,
    #[serde(rename = "bajista")]
    #[strum(serialize = "bajista")]
    Bearish,
    #[serde(rename = "bajista_fuerte")]
    #[strum(serialize = "bajista_fuerte")]
    StrongBearish,
    #[serde(rename = "bajista_volátil")]
    #[strum(serialize = "bajista_volátil")]
    VolatileBearish,
    #[serde(rename = "indefinido")]
    #[strum(serialize = "indefinido")]
    Undefined,
}

impl MarketState {
    /// Every state except `Lateral` counts as trending.
    #[inline]
    pub fn is_trending(self) -> bool {
        self != MarketState::Lateral
    }
}
