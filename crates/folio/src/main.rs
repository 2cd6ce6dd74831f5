//! Folio CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Markdown-driven portfolio site generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site from a directory of markdown projects
    Build {
        /// Site root holding projects/ and an optional folio.json
        input: Option<PathBuf>,

        /// Directory the generated site is written to
        #[arg(short = 'o', long, default_value = "_site")]
        output: PathBuf,

        /// Suppress console output
        #[arg(long)]
        quiet: bool,
    },

    /// Render a single markdown document to HTML
    Render {
        /// Markdown file to render
        input: PathBuf,

        /// Write output to FILE (prints to stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Emit a complete HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,folio_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            quiet,
        } => commands::build::execute(commands::build::BuildArgs {
            input,
            output,
            quiet,
        }),
        Commands::Render {
            input,
            output,
            standalone,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            output,
            standalone,
        }),
    }
}
