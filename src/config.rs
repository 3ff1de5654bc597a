use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

use crate::data_models::{DEFAULT_ENTITY, DEFAULT_LIMIT, ResultLimit};
use crate::itunes::{DEFAULT_TIMEOUT, ITUNES_API_URL};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub default_limit: ResultLimit,
    pub entity: String,
    pub bind_addr: SocketAddr,
    pub log_level: Level,
}

impl Config {
    /// Reads `MUSICSEARCH_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout_secs: u64 = parse_var(
            "MUSICSEARCH_TIMEOUT_SECS",
            &get_or_default("MUSICSEARCH_TIMEOUT_SECS", &DEFAULT_TIMEOUT.as_secs().to_string()),
        )?;

        let default_limit =
            get_or_default("MUSICSEARCH_DEFAULT_LIMIT", &DEFAULT_LIMIT.to_string());
        let default_limit = ResultLimit::parse(Some(&default_limit))
            .with_context(|| format!("invalid MUSICSEARCH_DEFAULT_LIMIT: {default_limit:?}"))?;

        Ok(Config {
            api_url: get_or_default("MUSICSEARCH_API_URL", ITUNES_API_URL),
            timeout: Duration::from_secs(timeout_secs),
            default_limit,
            entity: get_or_default("MUSICSEARCH_ENTITY", DEFAULT_ENTITY),
            bind_addr: parse_var(
                "MUSICSEARCH_BIND_ADDR",
                &get_or_default("MUSICSEARCH_BIND_ADDR", DEFAULT_BIND_ADDR),
            )?,
            log_level: parse_var(
                "MUSICSEARCH_LOG_LEVEL",
                &get_or_default("MUSICSEARCH_LOG_LEVEL", "info"),
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: ITUNES_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_limit: DEFAULT_LIMIT,
            entity: DEFAULT_ENTITY.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: Level::INFO,
        }
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid {key}: {raw:?}"))
}
