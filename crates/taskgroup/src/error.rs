use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskgroupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern '{pattern}' in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    #[error("Rules file not found: {0}")]
    RulesNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, TaskgroupError>;
