#![allow(dead_code)]

use std::path::PathBuf;
use taskgroup_lib::{ClassificationRules, RuleEngine};
use tempfile::TempDir;

/// Identifiers covering every built-in rule, with the series each should land in.
pub const SERIES_FIXTURES: &[(&str, &str)] = &[
    ("yx_gzy_jj_0701", "gzy"),
    ("xm_jj_Y12_0726", "jj_Y"),
    ("xm_jj_jy_0716", "jj_jy"),
    ("xm_jj_jy_0724", "jj_jy"),
    ("xm_jj_Y12_0801", "xm_jj"),
    ("jj_A01_0630", "jj_A"),
    ("lt_LKltjja20-3", "lt_LKltjja20-3"),
    ("lt_LXjja25-1", "lt_LXjja25-1"),
    ("lt_LKjja20-3", "lt_LKjja20-3"),
    ("lt_jja22-2-9", "lt_jja22-2-9"),
    ("lt_ltjja20-2", "lt_ltjja20-2"),
    ("LKXjja22-3", "LKXjja22-3"),
    ("LKjja20-3", "LKjja20-3"),
    ("Lk12a20-1", "Lk12a20-1"),
    ("jja20-3", "jja20-3"),
    ("LXda11-1", "LXda11"),
    ("LXd10-2", "LXd10"),
    ("x210_test", "x210"),
    ("u260", "u260"),
    ("rt-dj_0501", "rt_dj"),
    ("rz_dj_0420", "rz_dj"),
    ("rz-bc_0611", "rz_bc"),
    ("apbc33", "apbc33"),
    ("kj-bc-v20", "v20"),
    ("v20-0610", "v20"),
    ("0611-bc", "bc"),
    ("0628_bc01", "bc01"),
    ("rt_bc_0626", "rt_bc"),
    ("bc_0420", "bc"),
    ("totally_unrelated_name", "Uncategorized"),
];

pub fn builtin_engine() -> RuleEngine {
    RuleEngine::builtin().unwrap()
}

/// Built-in rules with `name` moved to sit directly before `before`.
pub fn builtin_with_rule_moved(name: &str, before: &str) -> ClassificationRules {
    let mut rules = ClassificationRules::builtin();
    let from = rules.rules.iter().position(|r| r.name == name).unwrap();
    let rule = rules.rules.remove(from);
    let to = rules.rules.iter().position(|r| r.name == before).unwrap();
    rules.rules.insert(to, rule);
    rules
}

pub fn write_rules_file(dir: &TempDir, toml: &str) -> PathBuf {
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, toml).unwrap();
    path
}
