use std::path::Path;

use anyhow::Context;

use rowval_model::RuleSet;

/// Read a rule set from a JSON file mapping field names to rule specs.
///
/// Specs may use the tuple form `["int", 18, 120]` or the object form
/// `{"kind": "int", "param1": 18, "param2": 120}`. Document order is
/// preserved and becomes the rule evaluation order.
pub fn read_rules_json(path: &Path) -> anyhow::Result<RuleSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading rules from {}", path.display()))?;
    let rules: RuleSet = serde_json::from_str(&text)
        .with_context(|| format!("parsing rules from {}", path.display()))?;
    Ok(rules)
}
