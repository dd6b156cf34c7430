use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// The closed catalog of supported rule kinds.
///
/// Unrecognized kind names parse to `Unknown`, which always passes.
/// Extending the catalog means adding a variant here and a dispatch arm in
/// the evaluator; kinds are never inferred dynamically per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Int,
    IntGreaterThan,
    IntGreaterOrEqual,
    IntLessThan,
    IntLessOrEqual,
    IntPositive,
    IntNonNegative,
    IntMultipleOf,
    StringLength,
    Email,
    Url,
    Uuid,
    Ipv4,
    Base64,
    IsoDate,
    IsoDateTime,
    Unknown,
}

/// Every recognized kind, in catalog order. Used for CLI listings.
pub const ALL_KINDS: &[RuleKind] = &[
    RuleKind::Int,
    RuleKind::IntGreaterThan,
    RuleKind::IntGreaterOrEqual,
    RuleKind::IntLessThan,
    RuleKind::IntLessOrEqual,
    RuleKind::IntPositive,
    RuleKind::IntNonNegative,
    RuleKind::IntMultipleOf,
    RuleKind::StringLength,
    RuleKind::Email,
    RuleKind::Url,
    RuleKind::Uuid,
    RuleKind::Ipv4,
    RuleKind::Base64,
    RuleKind::IsoDate,
    RuleKind::IsoDateTime,
];

impl RuleKind {
    /// Resolve a wire name to a kind. Total: unrecognized names map to
    /// `Unknown` rather than failing, so stray rules are no-ops instead of
    /// batch errors.
    pub fn parse(name: &str) -> Self {
        match name {
            "int" => Self::Int,
            "int_gt" => Self::IntGreaterThan,
            "int_gte" => Self::IntGreaterOrEqual,
            "int_lt" => Self::IntLessThan,
            "int_lte" => Self::IntLessOrEqual,
            "int_positive" => Self::IntPositive,
            "int_non_negative" => Self::IntNonNegative,
            "int_multiple_of" => Self::IntMultipleOf,
            "string" => Self::StringLength,
            "email" => Self::Email,
            "url" => Self::Url,
            "uuid" => Self::Uuid,
            "ipv4" => Self::Ipv4,
            "base64" => Self::Base64,
            "iso_date" => Self::IsoDate,
            "iso_datetime" => Self::IsoDateTime,
            _ => Self::Unknown,
        }
    }

    /// The wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::IntGreaterThan => "int_gt",
            Self::IntGreaterOrEqual => "int_gte",
            Self::IntLessThan => "int_lt",
            Self::IntLessOrEqual => "int_lte",
            Self::IntPositive => "int_positive",
            Self::IntNonNegative => "int_non_negative",
            Self::IntMultipleOf => "int_multiple_of",
            Self::StringLength => "string",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Ipv4 => "ipv4",
            Self::Base64 => "base64",
            Self::IsoDate => "iso_date",
            Self::IsoDateTime => "iso_datetime",
            Self::Unknown => "unknown",
        }
    }

    /// Short human description of what the kind checks.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Int => "integer within [param1, param2]",
            Self::IntGreaterThan => "integer greater than param1",
            Self::IntGreaterOrEqual => "integer greater than or equal to param1",
            Self::IntLessThan => "integer less than param1",
            Self::IntLessOrEqual => "integer less than or equal to param1",
            Self::IntPositive => "integer greater than zero",
            Self::IntNonNegative => "integer greater than or equal to zero",
            Self::IntMultipleOf => "integer multiple of param1",
            Self::StringLength => "string with byte length within [param1, param2]",
            Self::Email => "email address",
            Self::Url => "http or https URL",
            Self::Uuid => "hyphenated UUID",
            Self::Ipv4 => "dotted-decimal IPv4 address",
            Self::Base64 => "standard base64 text",
            Self::IsoDate => "ISO 8601 calendar date (YYYY-MM-DD)",
            Self::IsoDateTime => "ISO 8601 date and time",
            Self::Unknown => "unrecognized kind, always passes",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied rule descriptor for one field: a kind name plus up to
/// two numeric parameters. Missing parameters default to 0; the engine does
/// not validate parameter counts beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub kind: String,
    pub param1: i64,
    pub param2: i64,
}

impl FieldRule {
    /// A rule with no parameters (both default to 0).
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            param1: 0,
            param2: 0,
        }
    }

    /// A rule with a single parameter.
    pub fn with_param(kind: impl Into<String>, param1: i64) -> Self {
        Self {
            kind: kind.into(),
            param1,
            param2: 0,
        }
    }

    /// A rule with both parameters.
    pub fn with_params(kind: impl Into<String>, param1: i64, param2: i64) -> Self {
        Self {
            kind: kind.into(),
            param1,
            param2,
        }
    }
}

impl<'de> Deserialize<'de> for FieldRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldRuleVisitor)
    }
}

struct FieldRuleVisitor;

impl<'de> Visitor<'de> for FieldRuleVisitor {
    type Value = FieldRule;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a [kind, param1?, param2?] array or {kind, param1?, param2?} object")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<FieldRule, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let kind: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let param1: Option<i64> = seq.next_element()?;
        let param2: Option<i64> = seq.next_element()?;
        // Trailing values are ignored, matching the positional-extraction
        // contract (first extra value, second extra value, nothing more).
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FieldRule {
            kind,
            param1: param1.unwrap_or(0),
            param2: param2.unwrap_or(0),
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<FieldRule, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind: Option<String> = None;
        let mut param1: Option<i64> = None;
        let mut param2: Option<i64> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "kind" => kind = Some(map.next_value()?),
                "param1" => param1 = map.next_value()?,
                "param2" => param2 = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let kind = kind.ok_or_else(|| de::Error::missing_field("kind"))?;
        Ok(FieldRule {
            kind,
            param1: param1.unwrap_or(0),
            param2: param2.unwrap_or(0),
        })
    }
}

/// An ordered set of field rules, one per field name.
///
/// Insertion order is preserved and determines rule evaluation order; order
/// affects which rule short-circuits a record, never its final outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<(String, FieldRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for a field. Field names are unique within a set; a
    /// repeated name replaces the earlier rule in place.
    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) {
        let field = field.into();
        if let Some(entry) = self.rules.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = rule;
        } else {
            self.rules.push((field, rule));
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl<S: Into<String>> FromIterator<(S, FieldRule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (S, FieldRule)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (field, rule) in iter {
            rules.insert(field, rule);
        }
        rules
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field name to rule spec")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RuleSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Entries arrive in document order, which becomes the
                // compiled evaluation order.
                let mut rules = RuleSet::new();
                while let Some((field, rule)) = map.next_entry::<String, FieldRule>()? {
                    rules.insert(field, rule);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}
