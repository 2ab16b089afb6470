// Output models of the analysis pipeline
pub mod analysis_record;

pub use analysis_record::{AnalysisRecord, ChartAnalysis};
