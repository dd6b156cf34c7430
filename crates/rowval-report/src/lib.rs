//! Batch report generation.
//!
//! Serializes a [`BatchResult`] into a versioned JSON payload suitable for
//! machine consumption. The caller supplies the timestamp so report
//! generation stays deterministic and testable.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use rowval_model::BatchResult;

const REPORT_SCHEMA: &str = "rowval.batch-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// The on-disk shape of a batch report.
#[derive(Debug, Serialize)]
pub struct BatchReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub label: String,
    pub total_count: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub outcomes: Vec<bool>,
    pub invalid_indices: Vec<usize>,
}

impl BatchReportPayload {
    pub fn new(label: &str, result: &BatchResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: generated_at.to_rfc3339(),
            label: label.to_string(),
            total_count: result.total_count(),
            valid_count: result.valid_count(),
            invalid_count: result.invalid_count(),
            outcomes: result.outcomes().to_vec(),
            invalid_indices: result.invalid_indices(),
        }
    }
}

/// Write `batch_report.json` into `output_dir`, creating the directory if
/// needed. Returns the path of the written file.
pub fn write_batch_report(
    output_dir: &Path,
    label: &str,
    result: &BatchResult,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating report directory {}", output_dir.display()))?;
    let output_path = output_dir.join("batch_report.json");
    let payload = BatchReportPayload::new(label, result, generated_at);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("writing {}", output_path.display()))?;
    Ok(output_path)
}
