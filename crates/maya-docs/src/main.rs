//! maya-docs CLI - build-time tooling for the Maya Signer documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "maya-docs")]
#[command(about = "Site configuration tooling for the Maya Signer documentation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the overrides file (TOML, YAML or JSON)
    #[arg(short, long, default_value = "docs.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an overrides file and stub pages for the sidebar
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,

        /// Docs project root
        #[arg(short, long, default_value = "docs")]
        dir: PathBuf,
    },

    /// Print the resolved site configuration
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Validate the configuration and, with --root, its links
    Check {
        /// Docs project root to resolve links against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Write the navigation manifest and resolved configuration
    Manifest {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Print the "edit this page" URL for a page
    EditLink {
        /// Page path relative to the docs project root (e.g., user/index.md)
        path: String,
    },

    /// Render a markdown page with diagram support to stdout
    Render {
        /// Markdown file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes, dir } => {
            commands::init::run(&cli.config, &dir, yes).await?;
        }
        Commands::Config { format } => {
            commands::config::run(&cli.config, format).await?;
        }
        Commands::Check { root } => {
            commands::check::run(&cli.config, root.as_deref()).await?;
        }
        Commands::Manifest { output } => {
            commands::manifest::run(&cli.config, &output).await?;
        }
        Commands::EditLink { path } => {
            commands::edit_link::run(&cli.config, &path).await?;
        }
        Commands::Render { file } => {
            commands::render::run(&cli.config, &file).await?;
        }
    }

    Ok(())
}
