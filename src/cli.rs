use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "appskel",
    about = "Scaffold hello-world starter applications from built-in templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new starter application
    New {
        /// Target ecosystem (e.g. "c", "cpp"); prompted for when omitted
        #[arg(short, long)]
        ecosystem: Option<String>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Application name (single word, used in the output file name)
        #[arg(long)]
        name: Option<String>,

        /// Application title
        #[arg(long)]
        title: Option<String>,

        /// Application author
        #[arg(long)]
        author: Option<String>,

        /// Enable or disable a template option (can be repeated: -O flag[=true|false])
        #[arg(short = 'O', long = "option", value_name = "FLAG[=BOOL]")]
        options: Vec<String>,

        /// Read the application descriptor from a JSON file
        #[arg(long, value_name = "FILE")]
        descriptor: Option<String>,

        /// Never prompt; fail if a required field is missing
        #[arg(long)]
        no_input: bool,

        /// Show the rendered file without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List the available ecosystems
    List,
}
