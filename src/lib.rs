//! Trip cost estimator and itinerary builder.
//!
//! Prices a trip from a static catalog, lays out a one-day itinerary and
//! renders a proposal document, all behind a small JSON API.

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod itinerary;
pub mod models;
pub mod planner;
pub mod pricing;
pub mod proposal;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use cache::AppCache;
use config::AppConfig;
use models::Catalog;

pub use routes::create_router;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let cache = AppCache::new(config.quote_cache_capacity, config.quote_cache_ttl);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            cache,
        }
    }

    /// Build state from config, loading the catalog file when one is configured
    pub fn from_config(config: AppConfig) -> error::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default(),
        };
        Ok(Self::new(config, catalog))
    }
}
