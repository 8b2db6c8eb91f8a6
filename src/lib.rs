//! Booking quote and availability service for a peer-to-peer rental
//! marketplace.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use cache::AppCache;
use catalog::Catalog;
use config::Config;
use pricing::suggest::{PriceOracle, StaticPriceOracle};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub cache: AppCache,
    pub config: Arc<Config>,
    pub oracle: Arc<dyn PriceOracle>,
}

impl AppState {
    /// State with the static price oracle from `config`
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let oracle = StaticPriceOracle::new(config.suggested_prices.clone());
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            cache: AppCache::new(config.quote_cache_ttl),
            config: Arc::new(config),
            oracle: Arc::new(oracle),
        }
    }

    pub fn with_oracle(mut self, oracle: impl PriceOracle) -> Self {
        self.oracle = Arc::new(oracle);
        self
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/cache/stats", get(routes::health::cache_stats))
        .route("/api/products", get(routes::products::list))
        .route("/api/products/:id", get(routes::products::detail))
        .route("/api/products/:id/availability", put(routes::products::update_availability))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
