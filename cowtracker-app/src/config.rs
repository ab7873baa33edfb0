//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use bcentral::{BCentralConfig, DEFAULT_BASE_URL};
use rust_decimal::Decimal;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bcentral: BCentralConfig,
    /// CLP per USD used when the central bank cannot answer.
    pub fallback_usd_rate: Option<Decimal>,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub otel_enabled: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout_secs: u64 = parse_or(var("BCENTRAL_TIMEOUT_SECS"), "BCENTRAL_TIMEOUT_SECS", 30)?;
        let bcentral = BCentralConfig {
            base_url: var("BCENTRAL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user: var("BCENTRAL_USER"),
            password: var("BCENTRAL_PASSWORD"),
            timeout: Duration::from_secs(timeout_secs),
        };

        let fallback_usd_rate = var("FALLBACK_USD_RATE")
            .map(|v| Decimal::from_str(&v))
            .transpose()
            .context("FALLBACK_USD_RATE must be a decimal number")?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{}`", other),
        };

        Ok(Self {
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(var("APP_PORT"), "APP_PORT", 8000)?,
            bcentral,
            fallback_usd_rate,
            cors_origins,
            rate_limit_per_minute: parse_or(var("RATE_LIMIT_PER_MINUTE"), "RATE_LIMIT_PER_MINUTE", 100)?,
            otel_enabled: parse_or(var("OTEL_ENABLED"), "OTEL_ENABLED", false)?,
            log_format,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v.parse().with_context(|| format!("Invalid {}: {}", key, v)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.addr(), "0.0.0.0:8000");
        assert_eq!(config.bcentral.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bcentral.timeout, Duration::from_secs(30));
        assert!(!config.bcentral.has_credentials());
        assert_eq!(config.fallback_usd_rate, None);
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.rate_limit_per_minute, 100);
        assert!(!config.otel_enabled);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("APP_PORT", "9000"),
            ("BCENTRAL_USER", "me@example.cl"),
            ("BCENTRAL_PASSWORD", "secret"),
            ("BCENTRAL_TIMEOUT_SECS", "10"),
            ("FALLBACK_USD_RATE", "950.5"),
            ("CORS_ORIGINS", "http://localhost:3000, https://app.example.cl,"),
            ("OTEL_ENABLED", "true"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.bcentral.has_credentials());
        assert_eq!(config.bcentral.timeout, Duration::from_secs(10));
        assert_eq!(config.fallback_usd_rate, Some(Decimal::new(9505, 1)));
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://app.example.cl"]
        );
        assert!(config.otel_enabled);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = load(&[("BCENTRAL_USER", ""), ("APP_PORT", " ")]).unwrap();

        assert_eq!(config.bcentral.user, None);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(load(&[("APP_PORT", "eighty")]).is_err());
        assert!(load(&[("FALLBACK_USD_RATE", "lots")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
