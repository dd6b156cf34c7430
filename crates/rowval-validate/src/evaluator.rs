//! Batch evaluator.
//!
//! Walks the compiled rule list over every record in order, dispatching on
//! the resolved kind tag and short-circuiting each record at its first
//! failing rule. Records are independent of each other; the valid count is
//! derived from the finalized outcome buffer.

use rowval_checks as checks;
use rowval_model::{BatchResult, Record, Result, RuleSet, Scalar, ValidateError};

use crate::compiler::{CompiledRule, compile};

/// Validate a batch of records against a rule set.
///
/// Returns one outcome per record, in input order, plus the count of
/// records that passed every rule. An empty batch returns an empty result.
/// Inputs are never mutated and nothing is cached across calls.
pub fn validate_batch(records: &[Record], rules: &RuleSet) -> Result<BatchResult> {
    if records.is_empty() {
        return Ok(BatchResult::empty());
    }

    let compiled = compile(rules)?;

    let mut outcomes = Vec::new();
    outcomes.try_reserve_exact(records.len()).map_err(|_| {
        ValidateError::ResourceExhausted(format!("outcome buffer ({} records)", records.len()))
    })?;

    for record in records {
        outcomes.push(evaluate_record(&compiled, record));
    }

    let result = BatchResult::new(outcomes);
    tracing::debug!(
        records = records.len(),
        rules = compiled.len(),
        valid = result.valid_count(),
        "validated batch"
    );
    Ok(result)
}

/// Evaluate one record: true until any rule fails, stopping at the first
/// failure. A missing field fails the record the same way a failing check
/// does; it is not a skip.
fn evaluate_record(compiled: &[CompiledRule], record: &Record) -> bool {
    for rule in compiled {
        let Some(value) = record.get(&rule.field) else {
            return false;
        };
        if !rule_passes(rule, value) {
            return false;
        }
    }
    true
}

/// Dispatch a single rule against a field value.
///
/// Integer kinds accept only `Scalar::Int` and string kinds only
/// `Scalar::Str`; any other shape fails the rule rather than the call.
/// `Unknown` always passes.
fn rule_passes(rule: &CompiledRule, value: &Scalar) -> bool {
    use rowval_model::RuleKind as Kind;

    match rule.kind {
        Kind::Int => value
            .as_int()
            .is_some_and(|v| checks::int_in_range(v, rule.param1, rule.param2)),
        Kind::IntGreaterThan => value.as_int().is_some_and(|v| checks::int_gt(v, rule.param1)),
        Kind::IntGreaterOrEqual => value.as_int().is_some_and(|v| checks::int_gte(v, rule.param1)),
        Kind::IntLessThan => value.as_int().is_some_and(|v| checks::int_lt(v, rule.param1)),
        Kind::IntLessOrEqual => value.as_int().is_some_and(|v| checks::int_lte(v, rule.param1)),
        Kind::IntPositive => value.as_int().is_some_and(checks::int_positive),
        Kind::IntNonNegative => value.as_int().is_some_and(checks::int_non_negative),
        Kind::IntMultipleOf => value
            .as_int()
            .is_some_and(|v| checks::int_multiple_of(v, rule.param1)),
        Kind::StringLength => value
            .as_str()
            .is_some_and(|s| checks::string_length(s, rule.param1, rule.param2)),
        Kind::Email => value.as_str().is_some_and(checks::email),
        Kind::Url => value.as_str().is_some_and(checks::url),
        Kind::Uuid => value.as_str().is_some_and(checks::uuid),
        Kind::Ipv4 => value.as_str().is_some_and(checks::ipv4),
        Kind::Base64 => value.as_str().is_some_and(checks::base64),
        Kind::IsoDate => value.as_str().is_some_and(checks::iso_date),
        Kind::IsoDateTime => value.as_str().is_some_and(checks::iso_datetime),
        Kind::Unknown => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowval_model::FieldRule;

    fn rules(entries: &[(&str, FieldRule)]) -> RuleSet {
        entries
            .iter()
            .map(|(field, rule)| (field.to_string(), rule.clone()))
            .collect()
    }

    /// Exhaustive twin of `evaluate_record`: runs every rule regardless of
    /// earlier failures and counts rule applications.
    fn evaluate_record_exhaustive(compiled: &[CompiledRule], record: &Record) -> (bool, usize) {
        let mut outcome = true;
        let mut applied = 0usize;
        for rule in compiled {
            applied += 1;
            match record.get(&rule.field) {
                Some(value) => {
                    if !rule_passes(rule, value) {
                        outcome = false;
                    }
                }
                None => outcome = false,
            }
        }
        (outcome, applied)
    }

    /// Short-circuiting twin that also counts rule applications.
    fn evaluate_record_counted(compiled: &[CompiledRule], record: &Record) -> (bool, usize) {
        let mut applied = 0usize;
        for rule in compiled {
            applied += 1;
            let passed = record
                .get(&rule.field)
                .is_some_and(|value| rule_passes(rule, value));
            if !passed {
                return (false, applied);
            }
        }
        (true, applied)
    }

    #[test]
    fn short_circuit_changes_cost_not_outcome() {
        let rules = rules(&[
            ("a", FieldRule::with_params("int", 0, 10)),
            ("b", FieldRule::new("email")),
            ("c", FieldRule::new("int_positive")),
        ]);
        let compiled = compile(&rules).unwrap();

        // First rule fails: short-circuit stops after one application.
        let failing: Record = [
            ("a", Scalar::Int(99)),
            ("b", Scalar::Str("x@y.com".to_string())),
            ("c", Scalar::Int(1)),
        ]
        .into_iter()
        .collect();
        let (outcome, applied) = evaluate_record_counted(&compiled, &failing);
        let (exhaustive_outcome, exhaustive_applied) =
            evaluate_record_exhaustive(&compiled, &failing);
        assert_eq!(outcome, exhaustive_outcome);
        assert_eq!(applied, 1);
        assert_eq!(exhaustive_applied, 3);

        // All rules pass: both paths apply every rule.
        let passing: Record = [
            ("a", Scalar::Int(5)),
            ("b", Scalar::Str("x@y.com".to_string())),
            ("c", Scalar::Int(1)),
        ]
        .into_iter()
        .collect();
        let (outcome, applied) = evaluate_record_counted(&compiled, &passing);
        let (exhaustive_outcome, _) = evaluate_record_exhaustive(&compiled, &passing);
        assert_eq!(outcome, exhaustive_outcome);
        assert!(outcome);
        assert_eq!(applied, 3);
    }

    #[test]
    fn missing_field_fails_even_for_unknown_kind() {
        let rules = rules(&[("ghost", FieldRule::new("no_such_kind"))]);
        let compiled = compile(&rules).unwrap();
        let record = Record::new();
        assert!(!evaluate_record(&compiled, &record));
    }

    #[test]
    fn unknown_kind_passes_when_field_is_present() {
        let rules = rules(&[("x", FieldRule::new("no_such_kind"))]);
        let compiled = compile(&rules).unwrap();
        let record: Record = [("x", Scalar::Int(-999))].into_iter().collect();
        assert!(evaluate_record(&compiled, &record));
    }

    #[test]
    fn type_mismatch_is_a_soft_failure() {
        let rules = rules(&[("age", FieldRule::with_params("int", 0, 100))]);
        let compiled = compile(&rules).unwrap();

        let string_age: Record = [("age", Scalar::Str("25".to_string()))].into_iter().collect();
        assert!(!evaluate_record(&compiled, &string_age));

        let float_age: Record = [("age", Scalar::Float(25.0))].into_iter().collect();
        assert!(!evaluate_record(&compiled, &float_age));

        let bool_age: Record = [("age", Scalar::Bool(true))].into_iter().collect();
        assert!(!evaluate_record(&compiled, &bool_age));
    }

    #[test]
    fn string_rule_rejects_integer_value() {
        let rules = rules(&[("name", FieldRule::with_params("string", 1, 50))]);
        let compiled = compile(&rules).unwrap();
        let record: Record = [("name", Scalar::Int(42))].into_iter().collect();
        assert!(!evaluate_record(&compiled, &record));
    }
}
