//! # movers CLI
//!
//! Local inspection of a First Movers content directory: list the article
//! catalog in canonical order or show a single article by slug.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Content directory holding the markdown articles
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the article catalog in canonical order
    List {
        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,

        /// Only articles carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show a single article by slug
    Show {
        /// Article slug (source file name without extension)
        slug: String,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so --json output stays clean
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::List { json, tag } => {
            commands::list_articles(&cli.content, json, tag.as_deref())
        }
        Commands::Show { slug, json } => commands::show_article(&cli.content, &slug, json),
    }
}
