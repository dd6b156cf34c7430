//! Input loading for rowval.
//!
//! Records arrive as JSON arrays of flat objects or as CSV files with a
//! header row; rule specs arrive as JSON objects mapping field names to
//! rule descriptors. This crate owns the untyped boundary: shape errors
//! (a record that is not an object, a nested value) are detected here and
//! abort the whole load, before the engine ever runs.

mod csv_ingest;
mod json_ingest;
mod rules_ingest;

pub use csv_ingest::read_records_csv;
pub use json_ingest::{read_records_json, records_from_json};
pub use rules_ingest::read_rules_json;
