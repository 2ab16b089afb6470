// Image input, fixtures and run persistence
pub mod chart_image;
pub mod run_log;
pub mod synthetic;

pub use chart_image::{ChartImageError, decode_grid, load_grid};
pub use run_log::RunLogEntry;
