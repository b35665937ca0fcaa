//! Ello CLI - browse the book catalog and keep a reading list

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::SourceArgs;
use render::Renderer;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a page argument (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "ello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GraphQL endpoint serving the catalog
    #[arg(long, global = true, conflicts_with = "catalog")]
    endpoint: Option<String>,

    /// Read the catalog from a local JSON file instead
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of books from the catalog
    List {
        /// Only show titles containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (8 books per page by default)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show search suggestions for a draft title
    Options {
        /// Text typed so far
        #[arg(short, long, default_value = "")]
        draft: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively and build a reading list
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "ello_cli=debug,ello_core=debug"
    } else {
        "ello_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source_args = SourceArgs {
        config: cli.config,
        endpoint: cli.endpoint,
        catalog: cli.catalog,
    };
    let (settings, source) = commands::open_source(&source_args).await?;
    let colors = !cli.no_color && console::colors_enabled();
    let renderer = Renderer::new(&settings.theme, colors)?;

    match cli.command {
        Commands::List { search, page, json } => {
            commands::list(settings, source, &renderer, search, page, json).await
        }

        Commands::Options { draft, json } => {
            commands::options(settings, source, &renderer, &draft, json).await
        }

        Commands::Browse => commands::browse(settings, source, renderer).await,
    }
}
