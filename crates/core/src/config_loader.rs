use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/Config.toml";

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "PULSE_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration by layering defaults, the default TOML file and
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file or environment cannot be parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Loads configuration using a specific TOML file.
    ///
    /// A missing file is not an error; built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file or environment cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        }

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load().expect("defaults should load");
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.providers.request_timeout_secs, 10);
            assert_eq!(config.windows.ohlc_days, 30);
            assert_eq!(config.windows.fear_greed_limit, 60);
            assert_eq!(config.windows.funding_limit, 60);
            assert_eq!(config.windows.ratio_limit, 100);
            assert_eq!(config.windows.ratio_period, "1h");
            assert_eq!(config.search.min_query_len, 2);
            assert_eq!(config.search.max_results, 20);
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [providers]
                request_timeout_secs = 5

                [windows]
                ohlc_days = 7
                "#,
            )?;

            let config = ConfigLoader::load().expect("config should load");
            assert_eq!(config.providers.request_timeout_secs, 5);
            assert_eq!(config.windows.ohlc_days, 7);
            // Untouched keys keep their defaults
            assert_eq!(config.windows.market_chart_days, 30);
            assert_eq!(config.providers.coingecko_url, "https://api.coingecko.com/api/v3");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                [windows]
                funding_limit = 30
                "#,
            )?;
            jail.set_env("PULSE_WINDOWS__FUNDING_LIMIT", "90");
            jail.set_env("PULSE_PROVIDERS__BINANCE_FUTURES_URL", "http://localhost:9000");

            let config = ConfigLoader::load_from("custom.toml").expect("config should load");
            assert_eq!(config.windows.funding_limit, 90);
            assert_eq!(config.providers.binance_futures_url, "http://localhost:9000");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_error() {
        Jail::expect_with(|jail| {
            jail.set_env("PULSE_WINDOWS__OHLC_DAYS", "thirty");
            assert!(ConfigLoader::load().is_err());
            Ok(())
        });
    }
}
