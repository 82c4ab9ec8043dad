use crate::classify::ClassificationRules;
use crate::error::{Result, TaskgroupError};
use std::path::PathBuf;
use xdg::BaseDirectories;

pub const RULES_ENV: &str = "TASKGROUP_RULES";
const RULES_FILE: &str = "rules.toml";

/// Where the active rule table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    File(PathBuf),
    Builtin,
}

pub struct Config {
    pub rules: RulesSource,
}

impl Config {
    /// Resolve the rule source: explicit override, then `TASKGROUP_RULES`,
    /// then `$XDG_CONFIG_HOME/taskgroup/rules.toml`, then the built-in table.
    pub fn new(rules_override: Option<PathBuf>) -> Result<Self> {
        let env_path = std::env::var_os(RULES_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let rules = if let Some(path) = rules_override.or(env_path) {
            RulesSource::File(path)
        } else if let Some(path) = BaseDirectories::with_prefix("taskgroup")
            .ok()
            .and_then(|xdg| xdg.find_config_file(RULES_FILE))
        {
            RulesSource::File(path)
        } else {
            RulesSource::Builtin
        };

        Ok(Self { rules })
    }

    pub fn load_rules(&self) -> Result<ClassificationRules> {
        match &self.rules {
            RulesSource::File(path) => {
                if !path.exists() {
                    return Err(TaskgroupError::RulesNotFound(path.clone()));
                }
                log::info!("Loading rules from {}", path.display());
                ClassificationRules::from_file(path)
            }
            RulesSource::Builtin => {
                log::debug!("Using built-in series rules");
                Ok(ClassificationRules::builtin())
            }
        }
    }
}
