//! # palila CLI
//!
//! Command-line interface for the palila static site generator.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palila")]
#[command(author, version, about = "Build a website with Palila", long_about = None)]
struct Cli {
    /// Optional configuration file (root, template, keep_going)
    #[arg(long, global = true, env = "PALILA_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate index.html from every index.md under the root folder
    Build {
        /// Root website folder to recursively search for markdown files
        #[arg(long, value_name = "FOLDER")]
        root: Option<PathBuf>,

        /// Path to page template
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Keep building other folders when one fails
        #[arg(long)]
        keep_going: bool,
    },

    /// Delete every generated index.html under the root folder
    Clean {
        /// Root website folder
        #[arg(long, value_name = "FOLDER")]
        root: Option<PathBuf>,

        /// Keep cleaning past folders that cannot be read
        #[arg(long)]
        keep_going: bool,
    },

    /// Generate index.html for a single folder
    Page {
        /// Folder containing index.md
        #[arg(long, value_name = "FOLDER")]
        folder: PathBuf,

        /// Path to page template
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Site root used for relative links (defaults to the folder itself)
        #[arg(long, value_name = "FOLDER")]
        root: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            root,
            template,
            keep_going,
        } => commands::build_site(&config.with_overrides(root, template, keep_going)),
        Commands::Clean { root, keep_going } => {
            commands::clean_site(&config.with_overrides(root, None, keep_going))
        }
        Commands::Page {
            folder,
            template,
            root,
        } => commands::build_page(&folder, &config.with_overrides(root, template, false)),
    }
}
