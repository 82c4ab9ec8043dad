//! Ordered regex rules engine for sorting task identifiers into series.
//!
//! Rules are evaluated in list order and the first rule whose pattern is found
//! anywhere in the identifier decides the category:
//! - `full_match` reports the matched text (or the `series` named group)
//! - `static` reports the rule's own name
//! - `literal` reports a fixed label carried by the rule
//!
//! Identifiers no rule matches land in [`UNCATEGORIZED`].
//!
//! Rule lists are loaded from TOML `[[rules]]` arrays, so file order is
//! evaluation order.

use crate::classify::series::{SeriesExtract, SERIES_RULES};
use crate::error::{Result, TaskgroupError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Category assigned when no rule matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Named group a `full_match` pattern may use to narrow the reported span.
pub const SERIES_GROUP: &str = "series";

/// How a matching rule derives its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "extract", rename_all = "snake_case")]
pub enum Extraction {
    /// The exact matched substring
    FullMatch,
    /// The rule's name
    Static,
    /// A fixed label unrelated to the matched text
    Literal { label: String },
}

impl Extraction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extraction::FullMatch => "full_match",
            Extraction::Static => "static",
            Extraction::Literal { .. } => "literal",
        }
    }
}

/// A single entry in an ordered rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Unique identifier, also the label of `static` rules
    pub name: String,
    /// Regex searched for anywhere in the identifier
    pub pattern: String,
    #[serde(flatten)]
    pub extraction: Extraction,
}

impl ClassificationRule {
    pub fn full_match(name: &str, pattern: &str) -> Self {
        Self::new(name, pattern, Extraction::FullMatch)
    }

    pub fn fixed(name: &str, pattern: &str) -> Self {
        Self::new(name, pattern, Extraction::Static)
    }

    pub fn literal(name: &str, pattern: &str, label: &str) -> Self {
        Self::new(name, pattern, Extraction::Literal { label: label.to_string() })
    }

    fn new(name: &str, pattern: &str, extraction: Extraction) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            extraction,
        }
    }
}

/// Result of the first rule that matched an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Position of the rule in evaluation order
    pub rule_index: usize,
    pub rule_name: String,
    pub extraction: Extraction,
    /// Text the pattern matched (the `series` group when present)
    pub matched: String,
    pub category: String,
}

/// Ordered rule list as stored in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    #[serde(default)]
    pub rules: Vec<ClassificationRule>,
}

impl ClassificationRules {
    /// The built-in model series table.
    pub fn builtin() -> Self {
        let rules = SERIES_RULES
            .iter()
            .map(|(name, pattern, extract)| match extract {
                SeriesExtract::Full => ClassificationRule::full_match(name, pattern),
                SeriesExtract::Static => ClassificationRule::fixed(name, pattern),
                SeriesExtract::Literal(label) => ClassificationRule::literal(name, pattern, label),
            })
            .collect();
        Self { rules }
    }

    /// Load rules from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse rules from TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| TaskgroupError::Config(format!("Failed to parse TOML: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TaskgroupError::Config(format!("Failed to serialize rules: {}", e)))
    }

    /// Save rules to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

struct CompiledRule {
    rule: ClassificationRule,
    regex: Regex,
    has_series_group: bool,
}

impl CompiledRule {
    fn compile(rule: ClassificationRule) -> Result<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|source| TaskgroupError::InvalidPattern {
            rule: rule.name.clone(),
            pattern: rule.pattern.clone(),
            source,
        })?;
        let has_series_group = regex.capture_names().any(|name| name == Some(SERIES_GROUP));

        Ok(Self {
            rule,
            regex,
            has_series_group,
        })
    }

    fn matched_span<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.has_series_group {
            let captures = self.regex.captures(text)?;
            captures
                .name(SERIES_GROUP)
                .or_else(|| captures.get(0))
                .map(|m| m.as_str())
        } else {
            self.regex.find(text).map(|m| m.as_str())
        }
    }
}

/// Compiled, immutable rule list.
pub struct RuleEngine {
    compiled: Vec<CompiledRule>,
}

impl RuleEngine {
    /// Compile and validate the given rules, keeping their order.
    pub fn new(rules: ClassificationRules) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.rules.len());

        for rule in rules.rules {
            if rule.name.trim().is_empty() {
                return Err(TaskgroupError::Config(format!(
                    "Rule with pattern '{}' has an empty name",
                    rule.pattern
                )));
            }
            if !seen.insert(rule.name.clone()) {
                return Err(TaskgroupError::DuplicateRule(rule.name));
            }
            if let Extraction::Literal { label } = &rule.extraction {
                if label.is_empty() {
                    return Err(TaskgroupError::Config(format!(
                        "Literal rule '{}' has an empty label",
                        rule.name
                    )));
                }
            }
            compiled.push(CompiledRule::compile(rule)?);
        }

        log::debug!("Compiled {} classification rules", compiled.len());
        Ok(Self { compiled })
    }

    /// Engine over the built-in series table.
    pub fn builtin() -> Result<Self> {
        Self::new(ClassificationRules::builtin())
    }

    /// First rule matching `text`, if any.
    pub fn find_match(&self, text: &str) -> Option<RuleMatch> {
        for (rule_index, compiled) in self.compiled.iter().enumerate() {
            let Some(matched) = compiled.matched_span(text) else {
                continue;
            };
            let rule = &compiled.rule;

            let category = match &rule.extraction {
                // an empty span still decides: the identifier stays uncategorized
                Extraction::FullMatch if matched.is_empty() => {
                    log::debug!("Rule '{}' matched an empty span in '{}'", rule.name, text);
                    return None;
                }
                Extraction::FullMatch => matched.to_string(),
                Extraction::Static => rule.name.clone(),
                Extraction::Literal { label } => label.clone(),
            };

            log::debug!("'{}' -> '{}' (rule #{} '{}')", text, category, rule_index, rule.name);
            return Some(RuleMatch {
                rule_index,
                rule_name: rule.name.clone(),
                extraction: rule.extraction.clone(),
                matched: matched.to_string(),
                category,
            });
        }

        log::debug!("'{}' matched no rule", text);
        None
    }

    /// Category for `text`, or [`UNCATEGORIZED`].
    pub fn classify(&self, text: &str) -> String {
        self.find_match(text)
            .map(|m| m.category)
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    }

    /// Classify several identifiers, preserving input order.
    pub fn classify_batch<'a, S: AsRef<str>>(&self, texts: &'a [S]) -> Vec<(&'a str, String)> {
        texts
            .iter()
            .map(|text| {
                let text = text.as_ref();
                (text, self.classify(text))
            })
            .collect()
    }

    pub fn rules(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.compiled.iter().map(|c| &c.rule)
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rules: Vec<ClassificationRule>) -> RuleEngine {
        RuleEngine::new(ClassificationRules { rules }).unwrap()
    }

    #[test]
    fn test_parse_rules_from_toml() {
        let toml = r#"
            [[rules]]
            name = "gzy"
            pattern = "yx_gzy_jj"
            extract = "literal"
            label = "gzy"

            [[rules]]
            name = "jja"
            pattern = "jja[\\d-]+"
            extract = "full_match"

            [[rules]]
            name = "rz_dj"
            pattern = "rz_dj"
            extract = "static"
        "#;

        let rules = ClassificationRules::from_toml(toml).unwrap();
        assert_eq!(rules.rules.len(), 3);
        assert_eq!(rules.rules[0].extraction, Extraction::Literal { label: "gzy".to_string() });
        assert_eq!(rules.rules[1].pattern, r"jja[\d-]+");
        assert_eq!(rules.rules[1].extraction, Extraction::FullMatch);
        assert_eq!(rules.rules[2].extraction, Extraction::Static);
    }

    #[test]
    fn test_unknown_extraction_rejected() {
        let toml = r#"
            [[rules]]
            name = "odd"
            pattern = "odd"
            extract = "longest"
        "#;

        assert!(matches!(
            ClassificationRules::from_toml(toml),
            Err(TaskgroupError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip_keeps_order() {
        let rules = ClassificationRules::builtin();
        let parsed = ClassificationRules::from_toml(&rules.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_first_match_wins() {
        let ordered = engine(vec![
            ClassificationRule::literal("specific", r"xm_jj_Y\d+", "jj_Y"),
            ClassificationRule::literal("general", "xm_jj", "xm_jj"),
        ]);
        assert_eq!(ordered.classify("xm_jj_Y3"), "jj_Y");
        assert_eq!(ordered.classify("xm_jj_B3"), "xm_jj");

        let reversed = engine(vec![
            ClassificationRule::literal("general", "xm_jj", "xm_jj"),
            ClassificationRule::literal("specific", r"xm_jj_Y\d+", "jj_Y"),
        ]);
        assert_eq!(reversed.classify("xm_jj_Y3"), "xm_jj");
    }

    #[test]
    fn test_search_is_unanchored() {
        let engine = engine(vec![ClassificationRule::full_match("u", r"u\d+")]);
        assert_eq!(engine.classify("model-u260-final"), "u260");
    }

    #[test]
    fn test_static_reports_rule_name() {
        let engine = engine(vec![ClassificationRule::fixed("rz_dj", "rz_dj")]);
        let matched = engine.find_match("rz_dj_0420").unwrap();
        assert_eq!(matched.category, "rz_dj");
        assert_eq!(matched.rule_index, 0);
        assert_eq!(matched.extraction, Extraction::Static);
    }

    #[test]
    fn test_series_group_narrows_full_match() {
        let engine = engine(vec![ClassificationRule::full_match(
            "bc_v",
            r"bc[_-](?P<series>v\d+)",
        )]);
        let matched = engine.find_match("kj-bc-v20").unwrap();
        assert_eq!(matched.matched, "v20");
        assert_eq!(matched.category, "v20");
    }

    #[test]
    fn test_empty_full_match_stops_evaluation() {
        let engine = engine(vec![
            ClassificationRule::full_match("maybe_digits", r"\d*"),
            ClassificationRule::literal("fallback", "abc", "ABC"),
        ]);
        assert!(engine.find_match("abc").is_none());
        assert_eq!(engine.classify("abc"), UNCATEGORIZED);
        assert_eq!(engine.classify("12abc"), "12");
    }

    #[test]
    fn test_unmatched_and_empty_input() {
        let engine = engine(vec![ClassificationRule::fixed("rt_bc", "rt_bc")]);
        assert_eq!(engine.classify("nothing here"), UNCATEGORIZED);
        assert_eq!(engine.classify(""), UNCATEGORIZED);
        assert!(engine.find_match("").is_none());
    }

    #[test]
    fn test_invalid_pattern_names_rule() {
        let result = RuleEngine::new(ClassificationRules {
            rules: vec![ClassificationRule::full_match("broken", "jja[")],
        });
        match result {
            Err(TaskgroupError::InvalidPattern { rule, pattern, .. }) => {
                assert_eq!(rule, "broken");
                assert_eq!(pattern, "jja[");
            }
            _ => panic!("expected InvalidPattern"),
        }
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let result = RuleEngine::new(ClassificationRules {
            rules: vec![
                ClassificationRule::fixed("bc", "bc_"),
                ClassificationRule::literal("bc", r"\d{4}-bc", "bc"),
            ],
        });
        assert!(matches!(result, Err(TaskgroupError::DuplicateRule(name)) if name == "bc"));
    }

    #[test]
    fn test_empty_rule_name_rejected() {
        for name in ["", "   "] {
            let result = RuleEngine::new(ClassificationRules {
                rules: vec![ClassificationRule::fixed(name, "rz_dj")],
            });
            assert!(matches!(result, Err(TaskgroupError::Config(msg)) if msg.contains("rz_dj")));
        }
    }

    #[test]
    fn test_empty_literal_label_rejected() {
        let result = RuleEngine::new(ClassificationRules {
            rules: vec![ClassificationRule::literal("blank", "x", "")],
        });
        assert!(matches!(result, Err(TaskgroupError::Config(_))));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleEngine>();
    }

    #[test]
    fn test_batch_classification() {
        let engine = engine(vec![
            ClassificationRule::full_match("jja", r"jja[\d-]+"),
            ClassificationRule::fixed("rz_dj", "rz_dj"),
        ]);

        let results = engine.classify_batch(&["jja20-3", "rz_dj_0420", "other"]);
        assert_eq!(
            results,
            vec![
                ("jja20-3", "jja20-3".to_string()),
                ("rz_dj_0420", "rz_dj".to_string()),
                ("other", UNCATEGORIZED.to_string()),
            ]
        );
    }
}
