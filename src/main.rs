mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::New {
            ecosystem,
            output,
            name,
            title,
            author,
            options,
            descriptor,
            no_input,
            dry_run,
        } => commands::new::run(
            ecosystem, output, name, title, author, options, descriptor, no_input, dry_run,
        ),
        Commands::List => commands::list::run(),
    }
}
