//! One-shot dashboard snapshot for a token.

use crate::commands::AppContext;
use anyhow::{bail, Result};
use clap::Args;
use market_pulse_core::{MetricsFormatter, Token};

/// Arguments for the snapshot command.
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Priority symbol (e.g., "SOL"), or any catalog id (e.g., "dogecoin")
    pub token: String,

    /// Print the view as JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

/// Runs the snapshot command.
///
/// Provider failures only blank fields in the report.
///
/// # Errors
/// Returns an error if the token cannot be resolved.
pub async fn run_snapshot(ctx: &AppContext, args: SnapshotArgs) -> Result<()> {
    let Some(token) = resolve_token(ctx, &args.token).await else {
        bail!("Unknown token '{}'", args.token);
    };

    tracing::info!(token = %token, "Fetching snapshot");

    let Some(view) = ctx.session.select(token).await else {
        bail!("Snapshot was superseded");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.as_ref())?);
    } else {
        print!("{}", MetricsFormatter::format(&view.snapshot, &view.signal));
    }

    Ok(())
}

/// Resolves against the priority list first, then the catalog.
async fn resolve_token(ctx: &AppContext, input: &str) -> Option<Token> {
    if let Some(token) = ctx.directory.resolve(input) {
        return Some(token);
    }

    let input = input.trim();
    let results = ctx.directory.search_tokens(input).await;
    results
        .iter()
        .find(|t| t.catalog_id.eq_ignore_ascii_case(input))
        .or_else(|| results.iter().find(|t| t.symbol.eq_ignore_ascii_case(input)))
        .cloned()
}
