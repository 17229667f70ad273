//! Free-text token search.

use crate::commands::AppContext;
use clap::Args;

/// Arguments for the search command.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query (symbol or name)
    pub query: String,
}

/// Runs the search command.
pub async fn run_search(ctx: &AppContext, args: SearchArgs) {
    let results = ctx.directory.search_tokens(&args.query).await;

    if results.is_empty() {
        println!("No tokens found for '{}'", args.query.trim());
        return;
    }

    println!("{:<12} {:<36} {}", "SYMBOL", "CATALOG ID", "NAME");
    for token in results {
        println!(
            "{:<12} {:<36} {}",
            token.symbol,
            token.catalog_id,
            token.name.as_deref().unwrap_or("")
        );
    }
}
