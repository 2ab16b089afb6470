use serde::{Deserialize, Serialize};

use crate::config::{M1_IMAGE, M5_IMAGE, M15_IMAGE};

/// Chart timeframes captured together (short / medium / long)
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Timeframe {
    M1,
    M5,
    M15,
}

impl Timeframe {
    /// Screenshot file name expected for this timeframe
    pub fn default_file_name(self) -> &'static str {
        match self {
            Timeframe::M1 => M1_IMAGE,
            Timeframe::M5 => M5_IMAGE,
            Timeframe::M15 => M15_IMAGE,
        }
    }
}
