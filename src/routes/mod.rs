//! HTTP routing

pub mod catalog;
pub mod health;
pub mod trips;

use axum::{http::Method, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::{itinerary, pricing, AppState};

pub fn create_router(state: AppState) -> Router {
    // The trip form is served from a separate origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .merge(pricing::router())
        .merge(itinerary::router())
        .merge(trips::router())
        .merge(catalog::router())
        .merge(health::router())
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
