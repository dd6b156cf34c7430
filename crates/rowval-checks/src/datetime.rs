//! ISO 8601 date and datetime checks.
//!
//! Only the extended format (with delimiters) is accepted: `YYYY-MM-DD`
//! for dates, `YYYY-MM-DDThh:mm:ss` for datetimes. Values must be real
//! calendar dates, so `2024-13-45` fails even though it is well-shaped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Strict `YYYY-MM-DD` calendar date.
pub fn iso_date(value: &str) -> bool {
    // The length guard keeps chrono's lenient field parsing from accepting
    // unpadded forms like `2024-1-5`.
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// `YYYY-MM-DDThh:mm:ss` datetime, with optional fractional seconds and an
/// optional `Z` or numeric UTC offset.
pub fn iso_datetime(value: &str) -> bool {
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}
