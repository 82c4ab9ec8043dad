use console::style;
use taskgroup_lib::{Extraction, Result, RuleEngine, UNCATEGORIZED};

pub fn handle_explain_command(engine: &RuleEngine, identifier: &str, quiet: bool) -> Result<()> {
    match engine.find_match(identifier) {
        Some(m) => {
            if quiet {
                println!("{}", m.category);
                return Ok(());
            }
            println!("{} {}", style(">>>").cyan(), style(identifier).bold());
            println!("  Rule: #{} {}", m.rule_index + 1, style(&m.rule_name).cyan());
            println!("  Strategy: {}", m.extraction.as_str());
            println!("  Matched: {}", m.matched);
            if let Extraction::Literal { label } = &m.extraction {
                println!("  Label: {}", label);
            }
            println!("  Series: {}", style(&m.category).green());
        }
        None => {
            if quiet {
                println!("{}", UNCATEGORIZED);
                return Ok(());
            }
            println!("{} {}", style(">>>").cyan(), style(identifier).bold());
            println!("  {} none of {} rules matched", style("·").dim(), engine.len());
            println!("  Series: {}", style(UNCATEGORIZED).yellow());
        }
    }

    Ok(())
}
