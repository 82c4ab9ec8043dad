mod cli;

use clap::Parser;
use taskgroup_lib::Result;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    let engine = cli::init_engine(cli.rules_file)?;

    match cli.command {
        cli::Commands::Classify { identifiers, format } => {
            cli::classify::handle_classify_command(&engine, identifiers, format)
        }

        cli::Commands::Explain { identifier } => {
            cli::explain::handle_explain_command(&engine, &identifier, cli.quiet)
        }

        cli::Commands::Rules { export } => {
            cli::rules::handle_rules_command(&engine, export, cli.quiet)
        }
    }
}
