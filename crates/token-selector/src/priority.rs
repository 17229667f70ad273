use market_pulse_core::Token;

/// Quote asset of every futures market.
pub const FUTURES_QUOTE: &str = "USDT";

/// `(symbol, catalog id, futures base)` in display order.
///
/// The futures base is `None` for tokens without a derivatives market.
pub const PRIORITY_TOKENS: &[(&str, &str, Option<&str>)] = &[
    ("SOL", "solana", Some("SOL")),
    ("BTC", "bitcoin", Some("BTC")),
    ("ETH", "ethereum", Some("ETH")),
    ("BONK", "bonk", Some("1000BONK")),
    ("WIF", "dogwifcoin", Some("WIF")),
    ("POPCAT", "popcat", Some("POPCAT")),
    ("JUP", "jupiter-exchange-solana", Some("JUP")),
    ("FARTCOIN", "fartcoin", None),
];

/// Returns the curated priority tokens in display order.
#[must_use]
pub fn priority_tokens() -> Vec<Token> {
    PRIORITY_TOKENS
        .iter()
        .map(|(symbol, catalog_id, futures_base)| {
            let token = Token::new(*symbol, *catalog_id);
            match futures_base {
                Some(base) => token.with_futures_ticker(format!("{base}{FUTURES_QUOTE}")),
                None => token,
            }
        })
        .collect()
}
