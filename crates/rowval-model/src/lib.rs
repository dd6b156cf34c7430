//! Data model for the rowval batch validation engine.
//!
//! This crate defines the types shared across the workspace: scalar field
//! values and records, the rule-kind catalog and rule sets, batch results,
//! and the error taxonomy. It contains no validation logic of its own.

mod error;
mod record;
mod result;
mod rules;

pub use error::{Result, ValidateError};
pub use record::{Record, Scalar};
pub use result::BatchResult;
pub use rules::{ALL_KINDS, FieldRule, RuleKind, RuleSet};
