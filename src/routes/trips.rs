//! Trip planning and proposal download routes

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::{Json, Query};
use crate::itinerary::routes::ItineraryEntryResponse;
use crate::models::{TripDuration, TripRequest};
use crate::planner::{plan_trip, TripPlan};
use crate::pricing::responses::{CostBreakdownResponse, DiscountResponse};
use crate::pricing::routes::method_not_allowed;
use crate::proposal::{self, ProposalFormat};
use crate::AppState;

/// Trip summary as shown before download
#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub reference: String,
    pub date: String,
    pub duration_hours: TripDuration,
    pub participants: u32,
    pub designation: String,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TripPlanResponse {
    pub quote: CostBreakdownResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountResponse>,
    pub itinerary: Vec<ItineraryEntryResponse>,
    pub summary: TripSummary,
}

impl From<&TripPlan> for TripPlanResponse {
    fn from(plan: &TripPlan) -> Self {
        Self {
            quote: CostBreakdownResponse::new(&plan.quote.breakdown, plan.quote.warnings.clone()),
            discount: plan.has_discount().then(|| DiscountResponse::from(&plan.discount)),
            itinerary: plan.itinerary.iter().map(ItineraryEntryResponse::from).collect(),
            summary: TripSummary {
                reference: plan.reference.to_string(),
                date: plan.formatted_date(),
                duration_hours: plan.duration,
                participants: plan.participants.get(),
                designation: plan.designation.clone(),
                activities: plan.activities.iter().map(|a| a.display_name.clone()).collect(),
                notes: plan.notes.clone(),
                total: plan.display_total(),
            },
        }
    }
}

/// Query parameters for proposal download
#[derive(Debug, Deserialize)]
pub struct ProposalQuery {
    #[serde(default)]
    pub format: ProposalFormat,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/trips/plan", post(plan).fallback(method_not_allowed))
        .route("/api/trips/proposal", post(download_proposal).fallback(method_not_allowed))
}

/// Validate, price and schedule a full trip submission
async fn plan(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripPlanResponse>> {
    let plan = plan_trip(&state, &request, Local::now().date_naive()).await?;
    Ok(Json(TripPlanResponse::from(&plan)))
}

/// Plan a trip and return the proposal as a file download
async fn download_proposal(
    State(state): State<AppState>,
    Query(query): Query<ProposalQuery>,
    Json(request): Json<TripRequest>,
) -> Result<Response> {
    let plan = plan_trip(&state, &request, Local::now().date_naive()).await?;
    let rendered = proposal::render(&plan, query.format)?;

    tracing::info!("Rendered proposal {} as {}", plan.reference, rendered.filename);

    Ok((
        [
            (header::CONTENT_TYPE, rendered.format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", rendered.filename),
            ),
        ],
        rendered.body,
    )
        .into_response())
}
