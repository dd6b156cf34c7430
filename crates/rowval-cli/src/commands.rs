//! Command implementations.

use chrono::Utc;
use comfy_table::Table;
use tracing::info;

use rowval_ingest::{read_records_csv, read_records_json, read_rules_json};
use rowval_model::{ALL_KINDS, Record, RuleKind};
use rowval_report::write_batch_report;
use rowval_validate::validate_batch;

use crate::cli::{RecordFormatArg, ValidateArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::ValidationRun;

pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidationRun> {
    let rules = read_rules_json(&args.rules)?;
    let records = load_records(args)?;
    info!(
        records = records.len(),
        rules = rules.len(),
        "loaded records and rules"
    );

    let result = validate_batch(&records, &rules)?;

    let report_path = match &args.report_dir {
        Some(dir) => {
            let label = args
                .records
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "batch".to_string());
            Some(write_batch_report(dir, &label, &result, Utc::now())?)
        }
        None => None,
    };

    Ok(ValidationRun {
        records_path: args.records.clone(),
        record_count: records.len(),
        rule_count: rules.len(),
        result,
        report_path,
    })
}

fn load_records(args: &ValidateArgs) -> anyhow::Result<Vec<Record>> {
    let format = args.input_format.unwrap_or_else(|| {
        match args
            .records
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("csv") => RecordFormatArg::Csv,
            _ => RecordFormatArg::Json,
        }
    });
    match format {
        RecordFormatArg::Json => read_records_json(&args.records),
        RecordFormatArg::Csv => read_records_csv(&args.records),
    }
}

pub fn run_kinds() -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Parameters"),
        header_cell("Checks"),
    ]);
    apply_table_style(&mut table);
    for kind in ALL_KINDS {
        table.add_row(vec![kind.name(), params_hint(*kind), kind.description()]);
    }
    println!("{table}");
    Ok(())
}

fn params_hint(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Int | RuleKind::StringLength => "min, max",
        RuleKind::IntGreaterThan
        | RuleKind::IntGreaterOrEqual
        | RuleKind::IntLessThan
        | RuleKind::IntLessOrEqual => "bound",
        RuleKind::IntMultipleOf => "divisor",
        _ => "-",
    }
}
