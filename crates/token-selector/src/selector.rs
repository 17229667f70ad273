use crate::priority::priority_tokens;
use market_pulse_core::{SearchConfig, Token};
use market_pulse_data::TokenSearch;
use std::sync::Arc;
use tracing::{debug, info};

/// Priority tokens plus catalog search.
pub struct TokenDirectory {
    search: Arc<dyn TokenSearch>,
    config: SearchConfig,
    priority: Vec<Token>,
}

impl std::fmt::Debug for TokenDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDirectory")
            .field("config", &self.config)
            .field("priority", &self.priority.len())
            .finish_non_exhaustive()
    }
}

impl TokenDirectory {
    /// Creates a directory over the curated priority list.
    #[must_use]
    pub fn new(search: Arc<dyn TokenSearch>, config: SearchConfig) -> Self {
        Self {
            search,
            config,
            priority: priority_tokens(),
        }
    }

    /// Returns the priority tokens in display order.
    #[must_use]
    pub fn resolve_priority_tokens(&self) -> Vec<Token> {
        self.priority.clone()
    }

    /// Returns the token the dashboard opens on.
    #[must_use]
    pub fn default_token(&self) -> Token {
        self.priority
            .first()
            .cloned()
            .unwrap_or_else(|| Token::new("SOL", "solana").with_futures_ticker("SOLUSDT"))
    }

    /// Finds a priority token by symbol (case-insensitive) or catalog id.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<Token> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.priority
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(input) || t.catalog_id == input)
            .cloned()
    }

    /// Searches the token catalog.
    ///
    /// Queries shorter than the configured minimum return nothing without
    /// touching the network. Results never carry a futures ticker, even when
    /// they match a priority token.
    pub async fn search_tokens(&self, query: &str) -> Vec<Token> {
        let query = query.trim();
        if query.chars().count() < self.config.min_query_len {
            debug!(query, min = self.config.min_query_len, "Search query too short");
            return Vec::new();
        }

        let mut results = self
            .search
            .search_tokens(query, self.config.max_results)
            .await;
        results.truncate(self.config.max_results);
        for token in &mut results {
            token.futures_ticker = None;
        }

        info!(query, results = results.len(), "Token search complete");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingSearch {
        calls: AtomicUsize,
        last_query: Mutex<Option<String>>,
        results: Vec<Token>,
    }

    #[async_trait]
    impl TokenSearch for CountingSearch {
        async fn search_tokens(&self, query: &str, _max_results: usize) -> Vec<Token> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.to_string());
            self.results.clone()
        }
    }

    fn directory(search: Arc<CountingSearch>) -> TokenDirectory {
        TokenDirectory::new(search, SearchConfig::default())
    }

    // ============================================
    // Priority Tests
    // ============================================

    #[test]
    fn test_resolve_priority_tokens() {
        let dir = directory(Arc::new(CountingSearch::default()));
        let tokens = dir.resolve_priority_tokens();
        assert_eq!(tokens.len(), 8);
        assert_eq!(dir.default_token().symbol, "SOL");
        assert_eq!(dir.default_token().futures_ticker(), Some("SOLUSDT"));
    }

    #[test]
    fn test_resolve_by_symbol_or_id() {
        let dir = directory(Arc::new(CountingSearch::default()));

        assert_eq!(dir.resolve("btc").unwrap().catalog_id, "bitcoin");
        assert_eq!(dir.resolve(" Bonk ").unwrap().futures_ticker(), Some("1000BONKUSDT"));
        assert_eq!(dir.resolve("dogwifcoin").unwrap().symbol, "WIF");
        assert!(dir.resolve("fartcoin").unwrap().futures_ticker.is_none());
        assert!(dir.resolve("doge").is_none());
        assert!(dir.resolve("").is_none());
    }

    // ============================================
    // Search Tests
    // ============================================

    #[tokio::test]
    async fn test_short_query_skips_network() {
        let search = Arc::new(CountingSearch::default());
        let dir = directory(Arc::clone(&search));

        assert!(dir.search_tokens("").await.is_empty());
        assert!(dir.search_tokens("b").await.is_empty());
        assert!(dir.search_tokens("  b  ").await.is_empty());
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_min_length_counts_characters() {
        let search = Arc::new(CountingSearch::default());
        let dir = directory(Arc::clone(&search));

        // One multi-byte character is still one character
        assert!(dir.search_tokens("é").await.is_empty());
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);

        dir.search_tokens("bo").await;
        assert_eq!(search.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_trims_and_strips_futures() {
        let search = Arc::new(CountingSearch {
            results: vec![
                Token::new("SOL", "solana").with_futures_ticker("SOLUSDT"),
                Token::new("SOLAMA", "solama").with_name("Solama"),
            ],
            ..CountingSearch::default()
        });
        let dir = directory(Arc::clone(&search));

        let results = dir.search_tokens("  sol ").await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|t| t.futures_ticker.is_none()));
        assert_eq!(results[1].name.as_deref(), Some("Solama"));
        assert_eq!(search.last_query.lock().unwrap().as_deref(), Some("sol"));
    }

    #[tokio::test]
    async fn test_search_truncates() {
        let search = Arc::new(CountingSearch {
            results: (0..30)
                .map(|i| Token::new(format!("T{i}"), format!("token-{i}")))
                .collect(),
            ..CountingSearch::default()
        });
        let dir = directory(search);

        let results = dir.search_tokens("token").await;
        assert_eq!(results.len(), 20);
        assert_eq!(results[0].catalog_id, "token-0");
    }

    #[tokio::test]
    async fn test_search_failure_is_empty() {
        let dir = directory(Arc::new(CountingSearch::default()));
        assert!(dir.search_tokens("nothing").await.is_empty());
    }
}
