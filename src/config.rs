use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use crate::error::AppError;
use crate::pricing::UnknownInputPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub catalog_path: Option<PathBuf>,
    pub unknown_input_policy: UnknownInputPolicy,
    pub currency_symbol: String,
    pub quote_cache_capacity: u64,
    pub quote_cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_path: None,
            unknown_input_policy: UnknownInputPolicy::ZeroPrice,
            currency_symbol: "₹".to_string(),
            quote_cache_capacity: 1_000,
            quote_cache_ttl: Duration::from_secs(10 * 60),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr: SocketAddr = match lookup("TRIP_LISTEN_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid TRIP_LISTEN_ADDR: {err}")))?,
            None => defaults.listen_addr,
        };

        let catalog_path = lookup("TRIP_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let unknown_input_policy: UnknownInputPolicy = match lookup("TRIP_UNKNOWN_INPUT_POLICY") {
            Some(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid TRIP_UNKNOWN_INPUT_POLICY: {err}")))?,
            None => defaults.unknown_input_policy,
        };

        let currency_symbol = lookup("TRIP_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);

        let quote_cache_capacity: u64 = match lookup("TRIP_QUOTE_CACHE_CAPACITY") {
            Some(raw) => raw.parse().map_err(|err| {
                AppError::Config(format!("invalid TRIP_QUOTE_CACHE_CAPACITY: {err}"))
            })?,
            None => defaults.quote_cache_capacity,
        };

        let quote_cache_ttl = match lookup("TRIP_QUOTE_CACHE_TTL_SECS") {
            Some(raw) => raw.parse().map(Duration::from_secs).map_err(|err| {
                AppError::Config(format!("invalid TRIP_QUOTE_CACHE_TTL_SECS: {err}"))
            })?,
            None => defaults.quote_cache_ttl,
        };

        Ok(Self {
            listen_addr,
            catalog_path,
            unknown_input_policy,
            currency_symbol,
            quote_cache_capacity,
            quote_cache_ttl,
        })
    }
}
