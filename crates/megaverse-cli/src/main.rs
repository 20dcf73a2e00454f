use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "megaverse",
    about = "Megaverse — rebuild a goal map through the Megaverse API",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to a megaverse.toml (default: ./megaverse.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Candidate id; overrides CANDIDATE_ID
    #[arg(long, global = true)]
    candidate_id: Option<String>,
    /// API base URL; overrides MEGAVERSE_API
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the goal map and create every entity in it.
    ///
    /// Rate-limited and transient failures are retried with exponential
    /// backoff. Ctrl-C stops dispatching and waits for in-flight requests.
    Build {
        /// Maximum concurrent creation requests
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,
        /// Fetch and render the goal without creating anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch the goal map and print it
    Goal {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,megaverse=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref(), cli.candidate_id, cli.api)?;

    match cli.command {
        Commands::Build {
            concurrency,
            dry_run,
        } => commands::build::build(config, concurrency, dry_run).await,
        Commands::Goal { format } => commands::goal::goal(&config, &format).await,
    }
}
