use super::OutputFormat;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use taskgroup_lib::{Result, RuleEngine, UNCATEGORIZED};

#[derive(Debug, Serialize)]
struct Classification<'a> {
    identifier: &'a str,
    category: String,
    rule: Option<String>,
}

pub fn handle_classify_command(
    engine: &RuleEngine,
    identifiers: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let identifiers = if identifiers.is_empty() {
        read_identifiers(io::stdin().lock())?
    } else {
        clean_identifiers(identifiers)
    };

    log::info!("Classifying {} identifiers", identifiers.len());

    let results = classify_all(engine, &identifiers);
    let uncategorized = results.iter().filter(|c| c.rule.is_none()).count();
    if uncategorized > 0 {
        log::warn!("{} identifiers left {}", uncategorized, UNCATEGORIZED);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for c in &results {
                writeln!(out, "{}\t{}", c.identifier, c.category)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &results)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn classify_all<'a>(engine: &RuleEngine, identifiers: &'a [String]) -> Vec<Classification<'a>> {
    identifiers
        .iter()
        .map(|identifier| {
            let identifier = identifier.as_str();
            match engine.find_match(identifier) {
                Some(m) => Classification {
                    identifier,
                    category: m.category,
                    rule: Some(m.rule_name),
                },
                None => Classification {
                    identifier,
                    category: UNCATEGORIZED.to_string(),
                    rule: None,
                },
            }
        })
        .collect()
}

/// One identifier per line, trimmed, blank lines dropped.
fn read_identifiers<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut identifiers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            identifiers.push(trimmed.to_string());
        }
    }
    Ok(identifiers)
}

fn clean_identifiers(identifiers: Vec<String>) -> Vec<String> {
    identifiers
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}
