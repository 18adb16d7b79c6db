//! Pricing API routes

use axum::{extract::State, routing::post, Router};

use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::AppState;

use super::requests::CalculateRequest;
use super::responses::CostBreakdownResponse;
use super::services;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/calculate", post(calculate).fallback(method_not_allowed))
}

/// Price a trip
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CostBreakdownResponse>> {
    let quote = services::quote(
        &state.cache,
        &state.catalog,
        state.config.unknown_input_policy,
        &state.config.currency_symbol,
        request.duration,
        request.participants,
        &request.activities,
    )
    .await?;

    Ok(Json(CostBreakdownResponse::new(&quote.breakdown, quote.warnings)))
}

/// Any non-POST request to a POST-only endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
