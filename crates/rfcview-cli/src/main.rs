//! rfcview CLI - Explore RFC update/obsolete relationships from the command line

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, graph, search, show, stats};
use config::Config;
use rfcview_core::{parse_index, Directory};

#[derive(Parser)]
#[command(name = "rfcview")]
#[command(author, version, about = "Graph RFC update and obsolete relationships")]
pub struct Cli {
    /// Path to rfc-index.txt
    #[arg(short, long, global = true, env = "RFCVIEW_INDEX")]
    pub index: Option<PathBuf>,

    /// Output format: table, json, dot
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and render the relationship graph as DOT
    Graph(graph::GraphArgs),
    /// Search and list matching RFCs
    Search(search::SearchArgs),
    /// Show a single RFC
    Show(show::ShowArgs),
    /// Summarize the index
    Stats,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the parsed index
pub struct AppContext {
    pub config: Config,
    pub directory: Directory,
}

impl AppContext {
    pub fn new(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let path = config.resolve_index_path(cli.index.as_ref());
        tracing::debug!("Reading index from: {:?}", path);

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read index file {}", path.display()))?;
        let directory = parse_index(&raw)
            .with_context(|| format!("Failed to parse index file {}", path.display()))?;

        tracing::info!("Loaded {} records from {:?}", directory.len(), path);

        Ok(Self { config, directory })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting rfcview CLI");

    let config = Config::load();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Graph(args) => graph::run(args, &cli, &AppContext::new(&cli, config)?)?,
        Commands::Search(args) => search::run(args, &cli, &AppContext::new(&cli, config)?)?,
        Commands::Show(args) => show::run(args, &cli, &AppContext::new(&cli, config)?)?,
        Commands::Stats => stats::run(&cli, &AppContext::new(&cli, config)?)?,
    }

    Ok(())
}
