pub mod classify;
pub mod explain;
pub mod rules;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskgroup_lib::{Config, Result, RuleEngine};

#[derive(Parser)]
#[command(name = "taskgroup")]
#[command(about = "Sort task identifiers into model series using ordered regex rules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long = "rules",
        global = true,
        help = "Path to a TOML rules file (replaces the built-in table)"
    )]
    pub rules_file: Option<PathBuf>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify identifiers (reads stdin when none are given)")]
    Classify {
        #[arg(help = "Identifiers to classify")]
        identifiers: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Show which rule decides an identifier's series")]
    Explain {
        #[arg(help = "Identifier to explain")]
        identifier: String,
    },

    #[command(about = "List the active rules in evaluation order")]
    Rules {
        #[arg(long, help = "Write the active rules to a TOML file instead of printing them")]
        export: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

pub fn init_engine(rules_path: Option<PathBuf>) -> Result<RuleEngine> {
    let config = Config::new(rules_path)?;
    let rules = config.load_rules()?;
    RuleEngine::new(rules)
}
