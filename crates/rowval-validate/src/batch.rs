//! Specialized batch entry points for homogeneous inputs.
//!
//! These skip rule compilation entirely: the caller already knows the one
//! check to apply, so each function maps a primitive directly over a slice.

use rowval_checks as checks;
use rowval_model::BatchResult;

/// Validate a slice of integers against inclusive bounds.
pub fn validate_ints(values: &[i64], min: i64, max: i64) -> BatchResult {
    BatchResult::new(
        values
            .iter()
            .map(|value| checks::int_in_range(*value, min, max))
            .collect(),
    )
}

/// Validate a slice of strings against inclusive byte-length bounds.
pub fn validate_string_lengths<S: AsRef<str>>(values: &[S], min: i64, max: i64) -> BatchResult {
    BatchResult::new(
        values
            .iter()
            .map(|value| checks::string_length(value.as_ref(), min, max))
            .collect(),
    )
}

/// Validate a slice of email addresses.
pub fn validate_emails<S: AsRef<str>>(values: &[S]) -> BatchResult {
    BatchResult::new(
        values
            .iter()
            .map(|value| checks::email(value.as_ref()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_out_of_range_are_flagged_by_index() {
        let result = validate_ints(&[25, 30, 150, 18, 90], 18, 90);
        assert_eq!(result.invalid_indices(), vec![2]);
        assert_eq!(result.valid_count(), 4);
    }

    #[test]
    fn string_lengths_check_byte_bounds() {
        let result = validate_string_lengths(&["a", "ab", "abc"], 1, 2);
        assert_eq!(result.outcomes(), &[true, true, false]);
    }

    #[test]
    fn emails_are_checked_individually() {
        let result = validate_emails(&["alice@example.com", "invalid", "bob@b.io"]);
        assert_eq!(result.outcomes(), &[true, false, true]);
        assert_eq!(result.valid_count(), 2);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = validate_ints(&[], 0, 10);
        assert_eq!(result.total_count(), 0);
        assert_eq!(result.valid_count(), 0);
    }
}
