//! Rule compiler.
//!
//! Resolves each field rule exactly once per batch: the kind name becomes a
//! dispatch tag and the positional parameters are fixed in place, so the
//! evaluator never re-parses strings inside the per-record loop.

use rowval_model::{Result, RuleKind, RuleSet, ValidateError};

/// A dispatch-ready rule: field name, resolved kind tag, and parameters.
/// Built once per batch call and shared read-only across all records.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompiledRule {
    pub field: String,
    pub kind: RuleKind,
    pub param1: i64,
    pub param2: i64,
}

/// Compile a rule set into an ordered list of dispatch-ready rules.
///
/// One entry per input rule, in rule-set order. Unrecognized kind names
/// compile to [`RuleKind::Unknown`] and never fail. The only failure is
/// allocation of the compiled list itself.
pub(crate) fn compile(rules: &RuleSet) -> Result<Vec<CompiledRule>> {
    let mut compiled = Vec::new();
    compiled.try_reserve_exact(rules.len()).map_err(|_| {
        ValidateError::ResourceExhausted(format!("compiled rule list ({} rules)", rules.len()))
    })?;
    for (field, rule) in rules.iter() {
        compiled.push(CompiledRule {
            field: field.to_string(),
            kind: RuleKind::parse(&rule.kind),
            param1: rule.param1,
            param2: rule.param2,
        });
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowval_model::FieldRule;

    #[test]
    fn compile_preserves_rule_set_order() {
        let rules: RuleSet = [
            ("z", FieldRule::with_params("int", 0, 10)),
            ("a", FieldRule::new("email")),
            ("m", FieldRule::with_param("int_gt", 5)),
        ]
        .into_iter()
        .collect();

        let compiled = compile(&rules).unwrap();
        assert_eq!(compiled.len(), 3);
        assert_eq!(compiled[0].field, "z");
        assert_eq!(compiled[0].kind, RuleKind::Int);
        assert_eq!((compiled[0].param1, compiled[0].param2), (0, 10));
        assert_eq!(compiled[1].field, "a");
        assert_eq!(compiled[1].kind, RuleKind::Email);
        assert_eq!(compiled[2].kind, RuleKind::IntGreaterThan);
        assert_eq!((compiled[2].param1, compiled[2].param2), (5, 0));
    }

    #[test]
    fn unrecognized_kinds_compile_to_unknown() {
        let rules: RuleSet = [("x", FieldRule::new("no_such_kind"))].into_iter().collect();
        let compiled = compile(&rules).unwrap();
        assert_eq!(compiled[0].kind, RuleKind::Unknown);
    }

    #[test]
    fn missing_parameters_default_to_zero() {
        let rules: RuleSet = [("x", FieldRule::new("int"))].into_iter().collect();
        let compiled = compile(&rules).unwrap();
        assert_eq!((compiled[0].param1, compiled[0].param2), (0, 0));
    }

    #[test]
    fn empty_rule_set_compiles_to_empty_list() {
        let compiled = compile(&RuleSet::new()).unwrap();
        assert!(compiled.is_empty());
    }
}
