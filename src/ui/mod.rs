// Terminal presentation of analysis results
pub mod report;

pub use report::render_report;
