pub mod rules;
mod series;

pub use rules::{
    ClassificationRule, ClassificationRules, Extraction, RuleEngine, RuleMatch, SERIES_GROUP,
    UNCATEGORIZED,
};
