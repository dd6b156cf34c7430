use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use rowval_model::{Record, Scalar, ValidateError};

/// Read a batch of records from a JSON file containing an array of flat
/// objects.
pub fn read_records_json(path: &Path) -> anyhow::Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading records from {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing records from {}", path.display()))?;
    let Value::Array(rows) = value else {
        return Err(ValidateError::InvalidInput(
            "records file must contain a top-level JSON array".to_string(),
        )
        .into());
    };
    Ok(records_from_json(&rows)?)
}

/// Convert untyped JSON rows into records.
///
/// Every row must be an object; anything else is the non-mapping record
/// shape error, which aborts the whole load with no partial result.
/// `null` field values are treated as absent fields; nested arrays and
/// objects are rejected (records are flat).
pub fn records_from_json(rows: &[Value]) -> Result<Vec<Record>, ValidateError> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Value::Object(fields) = row else {
            return Err(ValidateError::InvalidInput(format!(
                "record {index} is not an object"
            )));
        };
        let mut record = Record::new();
        for (name, value) in fields {
            match scalar_from_json(value) {
                JsonScalar::Value(scalar) => record.insert(name.clone(), scalar),
                JsonScalar::Absent => {}
                JsonScalar::Nested => {
                    return Err(ValidateError::InvalidInput(format!(
                        "record {index} field '{name}' is not a scalar"
                    )));
                }
            }
        }
        records.push(record);
    }
    Ok(records)
}

enum JsonScalar {
    Value(Scalar),
    Absent,
    Nested,
}

fn scalar_from_json(value: &Value) -> JsonScalar {
    match value {
        Value::Null => JsonScalar::Absent,
        Value::Bool(flag) => JsonScalar::Value(Scalar::Bool(*flag)),
        Value::Number(number) => match number.as_i64() {
            Some(int) => JsonScalar::Value(Scalar::Int(int)),
            None => JsonScalar::Value(Scalar::Float(number.as_f64().unwrap_or(f64::NAN))),
        },
        Value::String(text) => JsonScalar::Value(Scalar::Str(text.clone())),
        Value::Array(_) | Value::Object(_) => JsonScalar::Nested,
    }
}
