//! Single-value validators with field-level error messages.
//!
//! These wrap the catalog checks for callers validating one value at a
//! time, where a message naming the violated constraint is more useful
//! than a bare bool.

use thiserror::Error;

use crate::{email, string_length};

/// A single failed check, carrying the field it applies to and the
/// violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct CheckError {
    pub field: String,
    pub message: String,
}

impl CheckError {
    fn new(message: String) -> Self {
        Self {
            field: "value".to_string(),
            message,
        }
    }
}

/// Integer with inclusive min/max bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInt {
    pub min: i64,
    pub max: i64,
}

impl BoundedInt {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, value: i64) -> Result<(), CheckError> {
        if value < self.min {
            return Err(CheckError::new(format!(
                "value {value} must be >= {}",
                self.min
            )));
        }
        if value > self.max {
            return Err(CheckError::new(format!(
                "value {value} must be <= {}",
                self.max
            )));
        }
        Ok(())
    }
}

/// String with inclusive byte-length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedString {
    pub min_len: i64,
    pub max_len: i64,
}

impl BoundedString {
    pub fn new(min_len: i64, max_len: i64) -> Self {
        Self { min_len, max_len }
    }

    pub fn validate(&self, value: &str) -> Result<(), CheckError> {
        if string_length(value, self.min_len, self.max_len) {
            return Ok(());
        }
        let len = value.len();
        if (len as i64) < self.min_len {
            Err(CheckError::new(format!(
                "string length {len} must be >= {}",
                self.min_len
            )))
        } else {
            Err(CheckError::new(format!(
                "string length {len} must be <= {}",
                self.max_len
            )))
        }
    }
}

/// Email address format validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailAddress;

impl EmailAddress {
    pub fn validate(value: &str) -> Result<(), CheckError> {
        if email(value) {
            Ok(())
        } else {
            Err(CheckError::new(
                "invalid email format (expected: local@domain)".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_int_names_the_violated_bound() {
        let age = BoundedInt::new(18, 120);
        assert!(age.validate(25).is_ok());
        let error = age.validate(15).unwrap_err();
        assert_eq!(error.to_string(), "value: value 15 must be >= 18");
        let error = age.validate(150).unwrap_err();
        assert_eq!(error.to_string(), "value: value 150 must be <= 120");
    }

    #[test]
    fn bounded_string_names_the_violated_bound() {
        let name = BoundedString::new(2, 5);
        assert!(name.validate("Bob").is_ok());
        let error = name.validate("X").unwrap_err();
        assert_eq!(error.message, "string length 1 must be >= 2");
        let error = name.validate("toolong").unwrap_err();
        assert_eq!(error.message, "string length 7 must be <= 5");
    }

    #[test]
    fn email_address_reports_format_failures() {
        assert!(EmailAddress::validate("a@b.com").is_ok());
        let error = EmailAddress::validate("invalid").unwrap_err();
        assert_eq!(error.message, "invalid email format (expected: local@domain)");
    }
}
