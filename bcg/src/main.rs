// bcg/src/main.rs

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => commands::run::execute(config),
        Commands::Preview {
            config,
            limit,
            format,
        } => commands::preview::execute(config, limit, format),
        Commands::Validate { config } => commands::validate::execute(config),
    }
}
