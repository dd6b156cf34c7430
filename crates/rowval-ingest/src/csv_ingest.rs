use std::path::Path;

use anyhow::Context;

use rowval_model::{Record, Scalar};

/// Read a batch of records from a CSV file with a header row.
///
/// Header names become field names. Cells that parse as integers become
/// `Scalar::Int`, cells that parse as floats become `Scalar::Float`, and
/// everything else stays a string. Empty cells are absent fields, so rules
/// on those fields fail the record via missing-field strictness.
pub fn read_records_csv(path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("reading records from {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("reading record {index}"))?;
        let mut record = Record::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            record.insert(name, parse_cell(cell));
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_cell(cell: &str) -> Scalar {
    if let Ok(int) = cell.parse::<i64>() {
        return Scalar::Int(int);
    }
    if let Ok(float) = cell.parse::<f64>() {
        return Scalar::Float(float);
    }
    Scalar::Str(cell.to_string())
}
