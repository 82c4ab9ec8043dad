pub mod classify;
pub mod config;
pub mod error;

pub use classify::{
    ClassificationRule, ClassificationRules, Extraction, RuleEngine, RuleMatch, UNCATEGORIZED,
};
pub use config::{Config, RulesSource};
pub use error::{Result, TaskgroupError};
