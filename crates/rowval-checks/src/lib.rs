//! Primitive validator catalog.
//!
//! Pure, deterministic pass/fail functions, one per rule kind. The batch
//! engine treats this crate as a black box: every function takes a typed
//! scalar plus its parameters and returns a bool, never panics, and retains
//! no state between calls.
//!
//! The single-value validators in [`bounded`] wrap the same checks with
//! field-level error messages for callers validating one value at a time.

pub mod bounded;
mod datetime;
mod int;
mod text;

pub use datetime::{iso_date, iso_datetime};
pub use int::{
    int_gt, int_gte, int_in_range, int_lt, int_lte, int_multiple_of, int_non_negative,
    int_positive,
};
pub use text::{base64, email, ipv4, string_length, url, uuid};
