//! Mangle CLI - deterministic fuzz payload generation.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            category,
            categories,
            json,
        } => commands::list::run(cli.file, category, categories, json, cli.verbose),

        Commands::Show { id, json } => commands::show::run(cli.file, id, json, cli.verbose),

        Commands::Generate {
            id,
            length,
            big,
            max,
        } => commands::generate::run(cli.file, id, length, big, max, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
