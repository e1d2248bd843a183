use clap::Parser;
use miette::Result;
use picon_assets::cli::{Cli, Commands};
use picon_assets::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Bundle(args) => picon_assets::cli::bundle::run(args, &printer)?,
        Commands::Import(args) => picon_assets::cli::import::run(args, &printer)?,
        Commands::Validate(args) => picon_assets::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => picon_assets::cli::completions::run(args)?,
    }

    Ok(())
}
