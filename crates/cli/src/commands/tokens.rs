//! Lists the priority tokens.

use crate::commands::AppContext;

/// Prints the priority tokens and their futures tickers.
pub fn run_tokens(ctx: &AppContext) {
    println!("{:<10} {:<28} {}", "SYMBOL", "CATALOG ID", "FUTURES");
    for token in ctx.directory.resolve_priority_tokens() {
        println!(
            "{:<10} {:<28} {}",
            token.symbol,
            token.catalog_id,
            token.futures_ticker().unwrap_or("--")
        );
    }
}
