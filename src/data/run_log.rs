use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RUN_LOG_TIMESTAMP_FORMAT;
use crate::models::AnalysisRecord;

/// One line of the run log: every record produced by a single invocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunLogEntry {
    pub timestamp: String,
    pub details: BTreeMap<String, AnalysisRecord>,
}

impl RunLogEntry {
    pub fn new(details: BTreeMap<String, AnalysisRecord>) -> Self {
        Self::at(Utc::now(), details)
    }

    pub fn at(time: DateTime<Utc>, details: BTreeMap<String, AnalysisRecord>) -> Self {
        Self {
            timestamp: time.format(RUN_LOG_TIMESTAMP_FORMAT).to_string(),
            details,
        }
    }

    /// Append as a single JSON line, creating the file (and parents) if needed.
    pub fn append_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .context(format!("Failed to open run log: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)
            .context(format!("Failed to serialize run log entry to: {}", path.display()))?;
        writeln!(writer).context(format!("Failed to write run log: {}", path.display()))?;
        writer
            .flush()
            .context(format!("Failed to flush run log: {}", path.display()))
    }
}
