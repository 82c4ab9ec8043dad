use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use std::path::PathBuf;
use taskgroup_lib::{ClassificationRules, Extraction, Result, RuleEngine};

pub fn handle_rules_command(
    engine: &RuleEngine,
    export: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = export {
        let rules = ClassificationRules {
            rules: engine.rules().cloned().collect(),
        };
        rules.save_to_file(&path)?;
        if !quiet {
            println!(
                "{} {} rules exported to {}",
                style("✓").green(),
                rules.rules.len(),
                path.display()
            );
        }
        return Ok(());
    }

    println!("{}", rules_table(engine));
    Ok(())
}

fn rules_table(engine: &RuleEngine) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Pattern").fg(Color::Cyan),
        Cell::new("Strategy").fg(Color::Cyan),
        Cell::new("Series").fg(Color::Cyan),
    ]);

    for (index, rule) in engine.rules().enumerate() {
        let series = match &rule.extraction {
            Extraction::FullMatch => "<matched text>".to_string(),
            Extraction::Static => rule.name.clone(),
            Extraction::Literal { label } => label.clone(),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&rule.name),
            Cell::new(&rule.pattern),
            Cell::new(rule.extraction.as_str()),
            Cell::new(series),
        ]);
    }

    table
}
