//! Result types shared between commands and summary rendering.

use std::path::PathBuf;

use rowval_model::BatchResult;

/// Everything a completed `validate` run produced.
pub struct ValidationRun {
    pub records_path: PathBuf,
    pub record_count: usize,
    pub rule_count: usize,
    pub result: BatchResult,
    pub report_path: Option<PathBuf>,
}
