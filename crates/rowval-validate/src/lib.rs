//! Batch validation engine.
//!
//! Compiles a set of per-field rules once per batch, then evaluates them
//! across many records with short-circuit semantics: a record stops at its
//! first failing rule, and the batch reports per-record outcomes plus a
//! valid count. Rule kinds dispatch to the primitive checks in
//! `rowval-checks`; the engine itself defines no validation semantics.
//!
//! Failure policy: missing fields, type-mismatched values, unknown rule
//! kinds, and failing checks are all local to one record. Only allocation
//! failure aborts a call.

mod batch;
mod compiler;
mod evaluator;

pub use batch::{validate_emails, validate_ints, validate_string_lengths};
pub use evaluator::validate_batch;
