mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cine_core::{load_catalog, ResolverConfig};
use commands::{FilmographyCommand, RecommendCommand, ResolveCommand, TopCommand};

/// Cinequery CLI - movie catalog resolution and query tool
#[derive(Debug, Parser)]
#[command(
    name = "cinequery",
    version,
    about = "Movie catalog resolution and query tool"
)]
struct Cli {
    /// Path to the movie dataset CSV
    #[arg(long, global = true, default_value = "data/imdb_top_1000.csv")]
    dataset: PathBuf,

    /// Optional YAML resolver configuration (fuzzy thresholds)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a free-text name against the catalog
    Resolve(ResolveCommand),
    /// List films by a director, with the film count
    Filmography(FilmographyCommand),
    /// Recommend movies by year, genres and rating
    Recommend(RecommendCommand),
    /// Top movies by vote count and gross revenue
    Top(TopCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(&cli.dataset)?;
    let config = match &cli.config {
        Some(path) => ResolverConfig::from_yaml_file(path)?,
        None => ResolverConfig::default(),
    };

    let exit_code = match cli.command {
        Commands::Resolve(cmd) => cmd.execute(&catalog, &config)?,
        Commands::Filmography(cmd) => cmd.execute(&catalog, &config)?,
        Commands::Recommend(cmd) => cmd.execute(&catalog)?,
        Commands::Top(cmd) => cmd.execute(&catalog)?,
    };

    std::process::exit(exit_code);
}
