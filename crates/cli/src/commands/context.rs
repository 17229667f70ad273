//! Wiring shared by every command.

use anyhow::{Context, Result};
use market_pulse_aggregator::{DashboardSession, MetricsAggregator};
use market_pulse_core::{AppConfig, ConfigLoader};
use market_pulse_data::ProviderSet;
use market_pulse_signals::SignalEngine;
use market_pulse_token_selector::TokenDirectory;
use std::sync::Arc;
use std::time::Duration;

/// Providers, token directory and session built from one configuration.
pub struct AppContext {
    pub config: AppConfig,
    pub directory: TokenDirectory,
    pub session: DashboardSession,
}

impl AppContext {
    /// Loads configuration from `config_path` and builds all components.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn load(config_path: &str) -> Result<Self> {
        let config = ConfigLoader::load_from(config_path)
            .with_context(|| format!("Failed to load configuration from {config_path}"))?;
        Self::from_config(config)
    }

    /// Builds all components from an already-loaded configuration.
    ///
    /// # Errors
    /// Returns an error if provider settings are invalid.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let providers = Arc::new(
            ProviderSet::from_config(&config).context("Invalid provider configuration")?,
        );

        let directory = TokenDirectory::new(
            Arc::new(providers.coingecko().clone()),
            config.search.clone(),
        );

        let aggregator = MetricsAggregator::new(providers)
            .with_call_timeout(Duration::from_secs(config.providers.request_timeout_secs));
        let session = DashboardSession::new(aggregator, SignalEngine::default());

        Ok(Self {
            config,
            directory,
            session,
        })
    }
}
