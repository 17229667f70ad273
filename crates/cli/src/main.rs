use clap::{Parser, Subcommand};

mod commands;

use commands::{run_search, run_snapshot, run_tokens, AppContext, SearchArgs, SnapshotArgs};

#[derive(Parser)]
#[command(name = "market-pulse")]
#[command(about = "Token market metrics and trading signals", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "config/Config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the priority tokens
    Tokens,
    /// Search the token catalog
    Search(SearchArgs),
    /// Aggregate metrics and compute the signal for one token
    Snapshot(SnapshotArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for reports and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = AppContext::load(&cli.config)?;
    tracing::debug!(config = ?ctx.config, "Configuration loaded");

    match cli.command {
        Commands::Tokens => run_tokens(&ctx),
        Commands::Search(args) => run_search(&ctx, args).await,
        Commands::Snapshot(args) => run_snapshot(&ctx, args).await?,
    }

    Ok(())
}
